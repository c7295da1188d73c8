//! Fixed classroom data behind the teacher and student views.

use domain::dashboard::{SkillPerformance, StudentRecord, TeacherDashboard, Trend};
use domain::mock_exam::{ExamStatus, MockExam};
use domain::question_bank::{BankQuestion, QuestionBank, ReviewStatus};
use domain::student::{PracticeRecord, RaioXHistory, StudentExam, StudentExamStatus};

/// Read-only source for the classroom views.
pub trait ClassroomCatalog {
    fn dashboard(&self) -> TeacherDashboard;
    fn question_bank(&self) -> QuestionBank;
    fn mock_exams(&self) -> Vec<MockExam>;
    fn student_exams(&self) -> Vec<StudentExam>;
    fn raio_x_history(&self) -> RaioXHistory;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

fn student(
    id: &str,
    name: &str,
    sessions_completed: u32,
    total_questions: u32,
    total_correct: u32,
    skills: &[&str],
) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        sessions_completed,
        total_questions,
        total_correct,
        skills_to_review: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn skill(name: &str, percent: f64, trend: Trend) -> SkillPerformance {
    SkillPerformance {
        skill: name.to_string(),
        percent,
        trend,
    }
}

impl ClassroomCatalog for StaticCatalog {
    fn dashboard(&self) -> TeacherDashboard {
        TeacherDashboard {
            students: vec![
                student("1", "Ana Silva", 8, 24, 20, &["EM13MAT310", "EM13MAT315"]),
                student("2", "Bruno Santos", 12, 36, 30, &["EM13MAT309"]),
                student(
                    "3",
                    "Carla Oliveira",
                    6,
                    18,
                    11,
                    &["EM13MAT309", "EM13MAT310", "EM13MAT312"],
                ),
                student("4", "Daniel Costa", 10, 30, 27, &["EM13MAT315"]),
                student(
                    "5",
                    "Elisa Ferreira",
                    5,
                    15,
                    9,
                    &["EM13MAT309", "EM13MAT310", "EM13MAT312", "EM13MAT315"],
                ),
                student("6", "Felipe Lima", 9, 27, 19, &["EM13MAT312", "EM13MAT315"]),
                student("7", "Gabriela Rocha", 11, 33, 28, &["EM13MAT310"]),
                student(
                    "8",
                    "Henrique Alves",
                    7,
                    21,
                    12,
                    &["EM13MAT309", "EM13MAT310", "EM13MAT312"],
                ),
                student("9", "Isabela Martins", 13, 39, 34, &["EM13MAT315"]),
                student("10", "João Pedro", 8, 24, 15, &["EM13MAT309", "EM13MAT312"]),
            ],
            skills: vec![
                skill("EM13MAT309 - Relações métricas e trigonométricas", 68.5, Trend::Down),
                skill("EM13MAT310 - Resolver problemas de contagem", 72.3, Trend::Stable),
                skill("EM13MAT312 - Geometria espacial", 65.8, Trend::Down),
                skill("EM13MAT315 - Grandezas e medidas", 78.9, Trend::Up),
                skill("EM13MAT316 - Álgebra e funções", 82.1, Trend::Up),
            ],
        }
    }

    fn question_bank(&self) -> QuestionBank {
        let entry = |id: u32,
                     statement: &str,
                     topic: &str,
                     skill: &str,
                     student: &str,
                     date: &str,
                     status: ReviewStatus,
                     reliability: Option<u8>| BankQuestion {
            id,
            statement: statement.to_string(),
            discipline: "Matemática".to_string(),
            topic: topic.to_string(),
            skill: skill.to_string(),
            student: student.to_string(),
            date: date.to_string(),
            status,
            reliability,
        };
        QuestionBank::new(vec![
            entry(
                1,
                "Calcule o valor de x na equação 2x + 5 = 15",
                "Equações do 1º grau",
                "EF09MA09",
                "João Silva",
                "2024-11-09",
                ReviewStatus::Pending,
                None,
            ),
            entry(
                2,
                "Qual é a área de um triângulo com base 10cm e altura 8cm?",
                "Geometria Plana",
                "EF09MA14",
                "Maria Santos",
                "2024-11-08",
                ReviewStatus::Adequate,
                Some(95),
            ),
            entry(
                3,
                "Resolva a inequação 3x - 7 > 2",
                "Inequações",
                "EF09MA10",
                "Pedro Costa",
                "2024-11-08",
                ReviewStatus::NeedsRevision,
                Some(68),
            ),
            entry(
                4,
                "Calcule o perímetro de um quadrado com lado 5cm",
                "Geometria Plana",
                "EF09MA14",
                "Ana Oliveira",
                "2024-11-07",
                ReviewStatus::Incoherent,
                Some(32),
            ),
        ])
    }

    fn mock_exams(&self) -> Vec<MockExam> {
        let classes = |names: &[&str]| -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        };
        vec![
            MockExam {
                id: 1,
                name: "Simulado ENEM 2024 - Matemática".into(),
                discipline: "Matemática".into(),
                questions: 45,
                start_date: "2024-11-10".into(),
                end_date: "2024-11-20".into(),
                status: ExamStatus::Active,
                classes: classes(&["9º A", "9º B"]),
                enrolled: 45,
                completed: 12,
                average: 68.5,
            },
            MockExam {
                id: 2,
                name: "Avaliação Diagnóstica - Álgebra".into(),
                discipline: "Matemática".into(),
                questions: 20,
                start_date: "2024-11-05".into(),
                end_date: "2024-11-12".into(),
                status: ExamStatus::Active,
                classes: classes(&["8º A"]),
                enrolled: 28,
                completed: 28,
                average: 72.3,
            },
            MockExam {
                id: 3,
                name: "Simulado Geometria Espacial".into(),
                discipline: "Matemática".into(),
                questions: 15,
                start_date: "2024-10-20".into(),
                end_date: "2024-10-30".into(),
                status: ExamStatus::Closed,
                classes: classes(&["9º A", "9º B", "9º C"]),
                enrolled: 67,
                completed: 65,
                average: 75.8,
            },
            MockExam {
                id: 4,
                name: "Preparatório ENEM - Funções".into(),
                discipline: "Matemática".into(),
                questions: 30,
                start_date: "2024-11-25".into(),
                end_date: "2024-12-05".into(),
                status: ExamStatus::Scheduled,
                classes: classes(&["3º A", "3º B"]),
                enrolled: 0,
                completed: 0,
                average: 0.0,
            },
        ]
    }

    fn student_exams(&self) -> Vec<StudentExam> {
        let exam = |id, title: &str, description: &str, questions, duration: &str, status, progress| {
            StudentExam {
                id,
                title: title.to_string(),
                description: description.to_string(),
                questions,
                duration: duration.to_string(),
                status,
                progress,
            }
        };
        vec![
            exam(
                1,
                "Simulado ENEM - Matemática",
                "45 questões de matemática e suas tecnologias",
                45,
                "90 min",
                StudentExamStatus::Available,
                0,
            ),
            exam(
                2,
                "Simulado BNCC - 9º Ano",
                "30 questões baseadas nas habilidades do 9º ano",
                30,
                "60 min",
                StudentExamStatus::InProgress,
                45,
            ),
            exam(
                3,
                "Simulado Geometria",
                "20 questões focadas em geometria plana e espacial",
                20,
                "40 min",
                StudentExamStatus::Completed,
                100,
            ),
        ]
    }

    fn raio_x_history(&self) -> RaioXHistory {
        let record = |id, date: &str, kind: &str, questions, correct, percent| PracticeRecord {
            id,
            date: date.to_string(),
            kind: kind.to_string(),
            questions,
            correct,
            percent,
        };
        RaioXHistory {
            total_practices: 12,
            total_questions: 36,
            hit_rate: 72.5,
            challenging_skills: vec![
                "EF09MA08 - Proporcionalidade e escalas".to_string(),
                "EF09MA14 - Geometria espacial".to_string(),
                "EF09MA03 - Operações com números reais".to_string(),
            ],
            records: vec![
                record(1, "2024-11-09", "Prática Inteligente", 3, 2, 66.7),
                record(2, "2024-11-08", "Simulado ENEM", 45, 34, 75.6),
                record(3, "2024-11-07", "Prática Inteligente", 3, 3, 100.0),
            ],
        }
    }
}
