use domain::submission_policy::SubmissionPolicy;
use domain::{AnswerSet, Question, Report, SessionGateway, SessionId, ValidationError};
use tracing::{debug, info, warn};

use crate::error::PracticeError;

#[derive(Debug, Clone, PartialEq)]
pub struct AnsweringSession {
    pub session_id: SessionId,
    pub questions: Vec<Question>,
    pub answers: AnswerSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportedSession {
    pub session_id: SessionId,
    pub questions: Vec<Question>,
    pub answers: AnswerSet,
    pub report: Report,
}

/// `CollectingReference -> Answering -> Reported`; `reset` starts over.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PracticeStage {
    #[default]
    CollectingReference,
    Answering(AnsweringSession),
    Reported(ReportedSession),
}

impl PracticeStage {
    pub fn name(&self) -> &'static str {
        match self {
            PracticeStage::CollectingReference => "collecting the reference question",
            PracticeStage::Answering(_) => "answering questions",
            PracticeStage::Reported(_) => "the report is ready",
        }
    }
}

/// Drives one student through start, answer and submit against a gateway.
pub struct PracticeService<G> {
    gateway: G,
    policy: SubmissionPolicy,
    stage: PracticeStage,
}

impl<G: SessionGateway> PracticeService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            policy: SubmissionPolicy::new(),
            stage: PracticeStage::CollectingReference,
        }
    }

    pub fn stage(&self) -> &PracticeStage {
        &self.stage
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        match &self.stage {
            PracticeStage::CollectingReference => None,
            PracticeStage::Answering(a) => Some(&a.session_id),
            PracticeStage::Reported(r) => Some(&r.session_id),
        }
    }

    pub fn questions(&self) -> &[Question] {
        match &self.stage {
            PracticeStage::CollectingReference => &[],
            PracticeStage::Answering(a) => &a.questions,
            PracticeStage::Reported(r) => &r.questions,
        }
    }

    pub fn answers(&self) -> Option<&AnswerSet> {
        match &self.stage {
            PracticeStage::CollectingReference => None,
            PracticeStage::Answering(a) => Some(&a.answers),
            PracticeStage::Reported(r) => Some(&r.answers),
        }
    }

    /// Questions still missing an answer; empty outside `Answering`.
    pub fn unanswered(&self) -> Vec<u32> {
        match &self.stage {
            PracticeStage::Answering(a) => a.answers.unanswered(a.questions.len()),
            _ => Vec::new(),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match &self.stage {
            PracticeStage::Reported(r) => Some(&r.report),
            _ => None,
        }
    }

    /// Sends the reference question and moves to `Answering`.
    ///
    /// Returns the number of questions the backend generated.
    pub async fn start(&mut self, reference: &str) -> Result<usize, PracticeError> {
        self.expect_collecting("start a session")?;
        let reference = self.policy.validate_reference(reference)?;

        let started = self
            .gateway
            .start_session(reference)
            .await
            .map_err(|err| {
                warn!(error = %err, "could not start session");
                PracticeError::request(err)
            })?;

        let count = started.questions.len();
        info!(session_id = %started.session_id, questions = count, "answering");
        self.stage = PracticeStage::Answering(AnsweringSession {
            session_id: started.session_id,
            questions: started.questions,
            answers: AnswerSet::new(),
        });
        Ok(count)
    }

    /// Picks up a session started elsewhere, provided it has no report yet.
    pub async fn resume(&mut self, session_id: SessionId) -> Result<usize, PracticeError> {
        self.expect_collecting("resume a session")?;

        let snapshot = self
            .gateway
            .fetch_session(&session_id)
            .await
            .map_err(|err| {
                warn!(%session_id, error = %err, "could not fetch session");
                PracticeError::request(err)
            })?;
        if snapshot.has_relatorio {
            return Err(ValidationError::AlreadyReported(session_id.to_string()).into());
        }

        let count = snapshot.questoes_geradas.len();
        info!(%session_id, questions = count, "resumed session");
        self.stage = PracticeStage::Answering(AnsweringSession {
            session_id,
            questions: snapshot.questoes_geradas,
            answers: AnswerSet::new(),
        });
        Ok(count)
    }

    /// Records the alternative chosen for 1-based question `number`.
    pub fn answer(&mut self, number: u32, letter: &str) -> Result<(), PracticeError> {
        let answering = match &mut self.stage {
            PracticeStage::Answering(a) => a,
            other => {
                return Err(ValidationError::WrongStage {
                    action: "answer",
                    stage: other.name(),
                }
                .into())
            }
        };
        let key = self
            .policy
            .resolve_answer(&answering.questions, number, letter)?;
        debug!(number, letter = %key, "answer recorded");
        answering.answers.select(number, key);
        Ok(())
    }

    /// Submits the answer set; blocked locally unless every question is answered.
    pub async fn submit(&mut self) -> Result<Report, PracticeError> {
        let answering = match &self.stage {
            PracticeStage::Answering(a) => a,
            other => {
                return Err(ValidationError::WrongStage {
                    action: "submit answers",
                    stage: other.name(),
                }
                .into())
            }
        };
        if let Err(err) = self
            .policy
            .validate_answers(&answering.answers, answering.questions.len())
        {
            debug!(error = %err, "submission blocked");
            return Err(err.into());
        }

        let report = self
            .gateway
            .submit_answers(&answering.session_id, &answering.answers)
            .await
            .map_err(|err| {
                warn!(session_id = %answering.session_id, error = %err, "could not submit answers");
                PracticeError::request(err)
            })?;

        let reported = ReportedSession {
            session_id: answering.session_id.clone(),
            questions: answering.questions.clone(),
            answers: answering.answers.clone(),
            report: report.clone(),
        };
        info!(
            session_id = %reported.session_id,
            correct = report.total_acertos,
            total = report.total_questoes,
            "report received"
        );
        self.stage = PracticeStage::Reported(reported);
        Ok(report)
    }

    /// Drops the current session; the next `start` opens a new one.
    pub fn reset(&mut self) {
        self.stage = PracticeStage::CollectingReference;
    }

    fn expect_collecting(&self, action: &'static str) -> Result<(), ValidationError> {
        match &self.stage {
            PracticeStage::CollectingReference => Ok(()),
            other => Err(ValidationError::WrongStage {
                action,
                stage: other.name(),
            }),
        }
    }
}
