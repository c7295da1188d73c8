//! Generated questions awaiting teacher review.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "adequada")]
    Adequate,
    #[serde(rename = "precisa_revisao")]
    NeedsRevision,
    #[serde(rename = "incoerente")]
    Incoherent,
}

impl ReviewStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pendente",
            ReviewStatus::Adequate => "Adequada",
            ReviewStatus::NeedsRevision => "Precisa Revisão",
            ReviewStatus::Incoherent => "Incoerente",
        }
    }

    pub fn is_flagged(self) -> bool {
        matches!(self, ReviewStatus::NeedsRevision | ReviewStatus::Incoherent)
    }
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pendente" | "pending" => Ok(ReviewStatus::Pending),
            "adequada" | "adequate" => Ok(ReviewStatus::Adequate),
            "precisa_revisao" | "needs-revision" => Ok(ReviewStatus::NeedsRevision),
            "incoerente" | "incoherent" => Ok(ReviewStatus::Incoherent),
            other => Err(format!(
                "unknown status `{other}` (expected pendente, adequada, precisa_revisao or incoerente)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReliabilityBand {
    Unknown,
    High,
    Medium,
    Low,
}

impl ReliabilityBand {
    pub fn from_score(score: Option<u8>) -> Self {
        match score {
            None | Some(0) => ReliabilityBand::Unknown,
            Some(s) if s >= 80 => ReliabilityBand::High,
            Some(s) if s >= 60 => ReliabilityBand::Medium,
            Some(_) => ReliabilityBand::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankQuestion {
    pub id: u32,
    pub statement: String,
    pub discipline: String,
    pub topic: String,
    pub skill: String,
    pub student: String,
    pub date: String,
    pub status: ReviewStatus,
    pub reliability: Option<u8>,
}

impl BankQuestion {
    pub fn reliability_band(&self) -> ReliabilityBand {
        ReliabilityBand::from_score(self.reliability)
    }
}

/// `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankFilter {
    pub status: Option<ReviewStatus>,
    pub discipline: Option<String>,
}

impl BankFilter {
    pub fn matches(&self, question: &BankQuestion) -> bool {
        if self.status.is_some_and(|status| question.status != status) {
            return false;
        }
        if let Some(discipline) = &self.discipline {
            if &question.discipline != discipline {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BankCounts {
    pub pending: usize,
    pub adequate: usize,
    pub flagged: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    questions: Vec<BankQuestion>,
}

impl QuestionBank {
    pub fn new(questions: Vec<BankQuestion>) -> Self {
        Self { questions }
    }

    pub fn filter(&self, filter: &BankFilter) -> Vec<&BankQuestion> {
        self.questions.iter().filter(|q| filter.matches(q)).collect()
    }

    /// Counters are computed over the whole bank, ignoring any filter.
    pub fn counts(&self) -> BankCounts {
        self.questions
            .iter()
            .fold(BankCounts::default(), |mut counts, q| {
                match q.status {
                    ReviewStatus::Pending => counts.pending += 1,
                    ReviewStatus::Adequate => counts.adequate += 1,
                    ReviewStatus::NeedsRevision | ReviewStatus::Incoherent => counts.flagged += 1,
                }
                counts
            })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
