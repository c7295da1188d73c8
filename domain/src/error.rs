use thiserror::Error;

/// Problems caught locally, before anything is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("reference question is empty")]
    EmptyReference,
    #[error("answered {answered} of {expected} questions")]
    IncompleteAnswers { answered: usize, expected: usize },
    #[error("question {0} has no answer")]
    MissingAnswer(u32),
    #[error("question {number} does not exist (session has {total})")]
    UnknownQuestion { number: u32, total: usize },
    #[error("question {number} has no alternative `{letter}`")]
    UnknownAlternative { number: u32, letter: String },
    #[error("cannot {action} while {stage}")]
    WrongStage {
        action: &'static str,
        stage: &'static str,
    },
    #[error("session {0} already has a report")]
    AlreadyReported(String),
}
