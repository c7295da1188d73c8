use crate::error::ValidationError;
use crate::models::Question;
use crate::session::AnswerSet;

/// Local checks applied before a request leaves the client.
#[derive(Debug, Clone, Default)]
pub struct SubmissionPolicy;

impl SubmissionPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Rejects blank references; the text itself is returned untouched.
    pub fn validate_reference<'a>(&self, text: &'a str) -> Result<&'a str, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyReference);
        }
        Ok(text)
    }

    /// Resolves `letter` against question `number` and returns the key to store.
    pub fn resolve_answer(
        &self,
        questions: &[Question],
        number: u32,
        letter: &str,
    ) -> Result<String, ValidationError> {
        let question = (number as usize)
            .checked_sub(1)
            .and_then(|idx| questions.get(idx))
            .ok_or(ValidationError::UnknownQuestion {
                number,
                total: questions.len(),
            })?;

        if question.alternativas.is_empty() {
            return Ok(letter.trim().to_string());
        }
        question
            .alternative_key(letter)
            .map(str::to_string)
            .ok_or_else(|| ValidationError::UnknownAlternative {
                number,
                letter: letter.trim().to_string(),
            })
    }

    pub fn validate_answers(
        &self,
        answers: &AnswerSet,
        question_count: usize,
    ) -> Result<(), ValidationError> {
        answers.check_complete(question_count)
    }
}
