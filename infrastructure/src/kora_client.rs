//! HTTP client for the Kora backend's session API.
//!
//! One request per call, no retry and no timeout. Any non-2xx status is a
//! failure and its body is never parsed.

use domain::{
    AnswerSet, BackendHealth, Question, Report, SessionGateway, SessionId, SessionSnapshot,
    StartedSession,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::telemetry::Telemetry;
use shared::types::Result;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const REFERENCE_FILE_NAME: &str = "questao.txt";
pub const REFERENCE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum KoraClientError {
    #[error("invalid backend URL `{0}`")]
    InvalidBaseUrl(String),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },
}

#[derive(Deserialize)]
struct StartResponse {
    session_id: String,
    #[serde(default)]
    questoes_geradas: Vec<Question>,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    respostas: &'a AnswerSet,
}

#[derive(Deserialize)]
struct SubmitResponse {
    relatorio_diagnostico: Report,
}

#[derive(Clone)]
pub struct KoraClient {
    client: Arc<Client>,
    base_url: Url,
}

impl KoraClient {
    pub fn new(base_url: &str) -> std::result::Result<Self, KoraClientError> {
        let base_url = Url::parse(base_url.trim())
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| KoraClientError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Self {
            client: Arc::new(Client::new()),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /api/v1/session/start` with the reference text as a `text/plain` attachment.
    pub async fn open_session(
        &self,
        reference_text: &str,
    ) -> std::result::Result<StartedSession, KoraClientError> {
        let url = self.endpoint(&["api", "v1", "session", "start"])?;
        let part = Part::text(reference_text.to_string())
            .file_name(REFERENCE_FILE_NAME)
            .mime_str("text/plain")
            .map_err(|source| transport(&url, source))?;
        let form = Form::new().part(REFERENCE_FIELD, part);

        let timer = Telemetry::new();
        let response = self.client.post(url.clone()).multipart(form).send().await;
        let body: StartResponse = read_json(&url, response).await?;
        info!(
            session_id = %body.session_id,
            questions = body.questoes_geradas.len(),
            elapsed_ms = timer.elapsed_ms() as u64,
            "session started"
        );
        Ok(StartedSession {
            session_id: SessionId::new(body.session_id),
            questions: body.questoes_geradas,
        })
    }

    /// `POST /api/v1/session/{id}/submit` with `{"respostas": {...}}`.
    pub async fn send_answers(
        &self,
        session_id: &SessionId,
        answers: &AnswerSet,
    ) -> std::result::Result<Report, KoraClientError> {
        let url = self.endpoint(&["api", "v1", "session", session_id.as_str(), "submit"])?;
        let timer = Telemetry::new();
        let response = self
            .client
            .post(url.clone())
            .json(&SubmitRequest { respostas: answers })
            .send()
            .await;
        let body: SubmitResponse = read_json(&url, response).await?;
        info!(
            %session_id,
            answered = answers.len(),
            correct = body.relatorio_diagnostico.total_acertos,
            elapsed_ms = timer.elapsed_ms() as u64,
            "answers submitted"
        );
        Ok(body.relatorio_diagnostico)
    }

    /// `GET /api/v1/session/{id}`.
    pub async fn session(
        &self,
        session_id: &SessionId,
    ) -> std::result::Result<SessionSnapshot, KoraClientError> {
        let url = self.endpoint(&["api", "v1", "session", session_id.as_str()])?;
        let response = self.client.get(url.clone()).send().await;
        read_json(&url, response).await
    }

    /// `GET /health`.
    pub async fn health(&self) -> std::result::Result<BackendHealth, KoraClientError> {
        let url = self.endpoint(&["health"])?;
        let response = self.client.get(url.clone()).send().await;
        read_json(&url, response).await
    }

    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, KoraClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| KoraClientError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

impl SessionGateway for KoraClient {
    async fn start_session(&self, reference_text: &str) -> Result<StartedSession> {
        Ok(self.open_session(reference_text).await?)
    }

    async fn submit_answers(&self, session_id: &SessionId, answers: &AnswerSet) -> Result<Report> {
        Ok(self.send_answers(session_id, answers).await?)
    }

    async fn fetch_session(&self, session_id: &SessionId) -> Result<SessionSnapshot> {
        Ok(self.session(session_id).await?)
    }
}

fn transport(url: &Url, source: reqwest::Error) -> KoraClientError {
    KoraClientError::Transport {
        endpoint: url.path().to_string(),
        source,
    }
}

async fn read_json<T: DeserializeOwned>(
    url: &Url,
    response: reqwest::Result<Response>,
) -> std::result::Result<T, KoraClientError> {
    let response = response.map_err(|source| {
        warn!(endpoint = url.path(), error = %source, "request failed");
        transport(url, source)
    })?;
    let status = response.status();
    if !status.is_success() {
        warn!(endpoint = url.path(), %status, "backend rejected request");
        return Err(KoraClientError::Status {
            endpoint: url.path().to_string(),
            status,
        });
    }
    debug!(endpoint = url.path(), %status, "decoding response");
    response.json().await.map_err(|source| transport(url, source))
}
