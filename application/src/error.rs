use domain::ValidationError;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of one practice action. The flow state is left untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Transport or HTTP failure; deliberately not broken down further.
    #[error("the Kora backend could not complete the request")]
    Request(#[source] BoxError),
}

impl PracticeError {
    pub(crate) fn request(err: anyhow::Error) -> Self {
        PracticeError::Request(err.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PracticeError::Validation(_))
    }
}
