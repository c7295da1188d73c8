pub mod classroom_service;
pub mod error;
pub mod practice_service;
pub mod report_service;

pub use error::PracticeError;
pub use practice_service::{PracticeService, PracticeStage};
