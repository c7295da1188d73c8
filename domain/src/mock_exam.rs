//! Mock exams ("simulados") as managed by teachers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "agendado")]
    Scheduled,
    #[serde(rename = "encerrado")]
    Closed,
}

impl ExamStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExamStatus::Active => "Ativo",
            ExamStatus::Scheduled => "Agendado",
            ExamStatus::Closed => "Encerrado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBand {
    Empty,
    Good,
    Fair,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockExam {
    pub id: u32,
    pub name: String,
    pub discipline: String,
    pub questions: u32,
    pub start_date: String,
    pub end_date: String,
    pub status: ExamStatus,
    pub classes: Vec<String>,
    pub enrolled: u32,
    pub completed: u32,
    pub average: f64,
}

impl MockExam {
    /// Share of enrolled students who finished, or `None` with nobody enrolled.
    pub fn completion_percent(&self) -> Option<f64> {
        if self.enrolled == 0 {
            return None;
        }
        Some(f64::from(self.completed) / f64::from(self.enrolled) * 100.0)
    }

    pub fn completion_band(&self) -> CompletionBand {
        match self.completion_percent() {
            None => CompletionBand::Empty,
            Some(p) if p >= 80.0 => CompletionBand::Good,
            Some(p) if p >= 50.0 => CompletionBand::Fair,
            Some(_) => CompletionBand::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExamSummary {
    pub active: usize,
    pub scheduled: usize,
    pub enrolled: u32,
}

pub fn summarize(exams: &[MockExam]) -> ExamSummary {
    ExamSummary {
        active: exams.iter().filter(|e| e.status == ExamStatus::Active).count(),
        scheduled: exams
            .iter()
            .filter(|e| e.status == ExamStatus::Scheduled)
            .count(),
        enrolled: exams.iter().map(|e| e.enrolled).sum(),
    }
}
