use anyhow::anyhow;
use domain::{
    AnswerSet, Question, Report, SessionGateway, SessionId, SessionSnapshot, StartedSession,
};
use shared::types::Result;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::fixtures;

pub const SESSION_ID: &str = "sess-42";

/// In-memory gateway that counts requests and can be told to fail them.
pub struct RecordingGateway {
    questions: Vec<Question>,
    report: Report,
    reported: bool,
    failing: AtomicBool,
    starts: AtomicUsize,
    submits: AtomicUsize,
    fetches: AtomicUsize,
    references: Mutex<Vec<String>>,
    submitted: Mutex<Vec<AnswerSet>>,
}

impl RecordingGateway {
    pub fn with_questions(count: usize) -> Self {
        Self {
            questions: fixtures::questions(count),
            report: fixtures::report(),
            reported: false,
            failing: AtomicBool::new(false),
            starts: AtomicUsize::new(0),
            submits: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
            references: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Snapshots served by `fetch_session` claim the session already has a report.
    pub fn already_reported(mut self) -> Self {
        self.reported = true;
        self
    }

    pub fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn submits(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> usize {
        self.starts() + self.submits() + self.fetches()
    }

    pub fn references(&self) -> Vec<String> {
        self.references.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<AnswerSet> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    fn check_failure(&self, endpoint: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow!("{endpoint} returned HTTP 500 Internal Server Error"));
        }
        Ok(())
    }
}

impl SessionGateway for RecordingGateway {
    async fn start_session(&self, reference_text: &str) -> Result<StartedSession> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.references
            .lock()
            .unwrap()
            .push(reference_text.to_string());
        self.check_failure("/api/v1/session/start")?;
        Ok(StartedSession {
            session_id: SessionId::new(SESSION_ID),
            questions: self.questions.clone(),
        })
    }

    async fn submit_answers(&self, _session_id: &SessionId, answers: &AnswerSet) -> Result<Report> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(answers.clone());
        self.check_failure("/api/v1/session/submit")?;
        Ok(self.report.clone())
    }

    async fn fetch_session(&self, session_id: &SessionId) -> Result<SessionSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check_failure("/api/v1/session")?;
        Ok(SessionSnapshot {
            session_id: session_id.to_string(),
            questao_original: "Resolva x² - 5x + 6 = 0".to_string(),
            questoes_geradas: self.questions.clone(),
            created_at: Some("2024-05-02T13:00:00".to_string()),
            submitted_at: self.reported.then(|| "2024-05-02T13:20:00".to_string()),
            has_relatorio: self.reported,
        })
    }
}
