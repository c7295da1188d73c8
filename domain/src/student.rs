//! Student-side views: available mock exams and the Raio-X history.

use serde::{Deserialize, Serialize};

/// Percentage at or above which a past result is shown as on target.
pub const TARGET_PERCENT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentExamStatus {
    #[serde(rename = "disponivel")]
    Available,
    #[serde(rename = "em_andamento")]
    InProgress,
    #[serde(rename = "concluido")]
    Completed,
}

impl StudentExamStatus {
    pub fn label(self) -> &'static str {
        match self {
            StudentExamStatus::Available => "Disponível",
            StudentExamStatus::InProgress => "Em Andamento",
            StudentExamStatus::Completed => "Concluído",
        }
    }

    /// What the student can do next with an exam in this status.
    pub fn action(self) -> &'static str {
        match self {
            StudentExamStatus::Available => "Iniciar Simulado",
            StudentExamStatus::InProgress => "Continuar",
            StudentExamStatus::Completed => "Ver Raio-X",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentExam {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub questions: u32,
    pub duration: String,
    pub status: StudentExamStatus,
    pub progress: u8,
}

impl StudentExam {
    /// Progress is only meaningful while the exam is under way.
    pub fn visible_progress(&self) -> Option<u8> {
        (self.status == StudentExamStatus::InProgress).then_some(self.progress.min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub id: u32,
    pub date: String,
    pub kind: String,
    pub questions: u32,
    pub correct: u32,
    pub percent: f64,
}

impl PracticeRecord {
    pub fn on_target(&self) -> bool {
        self.percent >= TARGET_PERCENT
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RaioXHistory {
    pub total_practices: u32,
    pub total_questions: u32,
    pub hit_rate: f64,
    pub challenging_skills: Vec<String>,
    pub records: Vec<PracticeRecord>,
}
