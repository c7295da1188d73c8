use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValidationError;
use crate::models::Question;

/// Opaque session handle issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a successful `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedSession {
    pub session_id: SessionId,
    pub questions: Vec<Question>,
}

/// Selected alternative per 1-based question number.
///
/// Serializes as a JSON object with string keys (`{"1": "A"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer for `number`.
    pub fn select(&mut self, number: u32, letter: impl Into<String>) {
        self.0.insert(number, letter.into());
    }

    pub fn get(&self, number: u32) -> Option<&str> {
        self.0.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(number, letter)| (*number, letter.as_str()))
    }

    /// Numbers in `1..=question_count` that have no answer yet, ascending.
    pub fn unanswered(&self, question_count: usize) -> Vec<u32> {
        (1..=question_count as u32)
            .filter(|number| !self.0.contains_key(number))
            .collect()
    }

    /// Requires exactly the keys `1..=question_count`.
    pub fn check_complete(&self, question_count: usize) -> Result<(), ValidationError> {
        if self.len() != question_count {
            return Err(ValidationError::IncompleteAnswers {
                answered: self.len(),
                expected: question_count,
            });
        }
        // Same cardinality, so any out-of-range key leaves a hole in 1..=N.
        for number in (1..=question_count).map(|n| n as u32) {
            if !self.0.contains_key(&number) {
                return Err(ValidationError::MissingAnswer(number));
            }
        }
        Ok(())
    }
}

impl FromIterator<(u32, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
