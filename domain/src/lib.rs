pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod mock_exam;
pub mod models;
pub mod question_bank;
pub mod session;
pub mod student;
pub mod submission_policy;

pub use error::ValidationError;
pub use gateway::SessionGateway;
pub use models::{BackendHealth, CorrectionItem, Question, Report, SessionSnapshot};
pub use session::{AnswerSet, SessionId, StartedSession};
