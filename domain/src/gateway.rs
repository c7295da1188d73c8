use shared::types::Result;
use std::future::Future;

use crate::models::{Report, SessionSnapshot};
use crate::session::{AnswerSet, SessionId, StartedSession};

/// The backend's session protocol, as seen by the practice flow.
///
/// Implementations perform exactly one request per call and never retry.
pub trait SessionGateway {
    fn start_session(
        &self,
        reference_text: &str,
    ) -> impl Future<Output = Result<StartedSession>> + Send;

    fn submit_answers(
        &self,
        session_id: &SessionId,
        answers: &AnswerSet,
    ) -> impl Future<Output = Result<Report>> + Send;

    fn fetch_session(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<SessionSnapshot>> + Send;
}
