//! Teacher dashboard: per-student results and skill trends.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub sessions_completed: u32,
    pub total_questions: u32,
    pub total_correct: u32,
    pub skills_to_review: Vec<String>,
}

impl StudentRecord {
    pub fn percent_correct(&self) -> f64 {
        percent(self.total_correct, self.total_questions)
    }

    pub fn badge(&self) -> PerformanceBadge {
        PerformanceBadge::from_percent(self.percent_correct())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn symbol(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPerformance {
    pub skill: String,
    pub percent: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBadge {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl PerformanceBadge {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            PerformanceBadge::Excellent
        } else if percent >= 60.0 {
            PerformanceBadge::Good
        } else if percent >= 40.0 {
            PerformanceBadge::Fair
        } else {
            PerformanceBadge::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceBadge::Excellent => "Excelente",
            PerformanceBadge::Good => "Bom",
            PerformanceBadge::Fair => "Regular",
            PerformanceBadge::NeedsImprovement => "Precisa Melhorar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeacherDashboard {
    pub students: Vec<StudentRecord>,
    pub skills: Vec<SkillPerformance>,
}

impl TeacherDashboard {
    pub fn total_students(&self) -> usize {
        self.students.len()
    }

    pub fn total_sessions(&self) -> u32 {
        self.students.iter().map(|s| s.sessions_completed).sum()
    }

    pub fn total_questions(&self) -> u32 {
        self.students.iter().map(|s| s.total_questions).sum()
    }

    pub fn total_correct(&self) -> u32 {
        self.students.iter().map(|s| s.total_correct).sum()
    }

    /// `sum(correct) / sum(questions) * 100`, weighted by question count.
    pub fn overall_average(&self) -> f64 {
        percent(self.total_correct(), self.total_questions())
    }
}

fn percent(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(correct) / f64::from(total)) * 100.0
}
