use domain::dashboard::TeacherDashboard;
use domain::mock_exam::{self, ExamSummary, MockExam};
use domain::question_bank::{BankCounts, BankFilter, BankQuestion};
use domain::student::{RaioXHistory, StudentExam};
use infrastructure::catalog::{ClassroomCatalog, StaticCatalog};

pub struct BankView {
    pub questions: Vec<BankQuestion>,
    pub counts: BankCounts,
    pub total: usize,
}

pub struct ExamBoard {
    pub exams: Vec<MockExam>,
    pub summary: ExamSummary,
}

/// Teacher- and student-facing views over the classroom catalog.
pub struct ClassroomService<C = StaticCatalog> {
    catalog: C,
}

impl<C: ClassroomCatalog> ClassroomService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn dashboard(&self) -> TeacherDashboard {
        self.catalog.dashboard()
    }

    pub fn question_bank(&self, filter: &BankFilter) -> BankView {
        let bank = self.catalog.question_bank();
        BankView {
            questions: bank.filter(filter).into_iter().cloned().collect(),
            counts: bank.counts(),
            total: bank.len(),
        }
    }

    pub fn mock_exams(&self) -> ExamBoard {
        let exams = self.catalog.mock_exams();
        let summary = mock_exam::summarize(&exams);
        ExamBoard { exams, summary }
    }

    pub fn student_exams(&self) -> Vec<StudentExam> {
        self.catalog.student_exams()
    }

    /// Past results, most recent first.
    pub fn raio_x_history(&self) -> RaioXHistory {
        let mut history = self.catalog.raio_x_history();
        history.records.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }
}

impl ClassroomService<StaticCatalog> {
    pub fn with_static_catalog() -> Self {
        Self::new(StaticCatalog)
    }
}
