use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::fixtures;

/// One part of a multipart upload, as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub text: String,
}

#[derive(Default)]
struct Recorded {
    uploads: Vec<Upload>,
    submissions: Vec<(String, Value)>,
    lookups: Vec<String>,
}

#[derive(Clone, Default)]
struct StubState {
    recorded: Arc<Mutex<Recorded>>,
    failing: Arc<AtomicBool>,
    open_ended_last: Arc<AtomicBool>,
}

/// Minimal Kora backend bound to an ephemeral loopback port.
pub struct StubBackend {
    addr: SocketAddr,
    state: StubState,
}

impl StubBackend {
    pub async fn spawn() -> Self {
        let state = StubState::default();
        let app = Router::new()
            .route("/api/v1/session/start", post(start_session))
            .route("/api/v1/session/{id}", get(get_session))
            .route("/api/v1/session/{id}/submit", post(submit_answers))
            .route("/health", get(health))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend failed");
        });
        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every endpoint answers 500 while failing.
    pub fn fail_requests(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }

    /// The last generated question comes back without `alternativas` or
    /// `gabarito`, as the backend does when it cannot build an answer key.
    pub fn open_ended_last(&self, enabled: bool) {
        self.state.open_ended_last.store(enabled, Ordering::SeqCst);
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.state.recorded.lock().unwrap().uploads.clone()
    }

    pub fn submissions(&self) -> Vec<(String, Value)> {
        self.state.recorded.lock().unwrap().submissions.clone()
    }

    pub fn lookups(&self) -> Vec<String> {
        self.state.recorded.lock().unwrap().lookups.clone()
    }
}

fn check_failure(state: &StubState) -> Result<(), StatusCode> {
    if state.failing.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(())
}

async fn start_session(
    State(state): State<StubState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, StatusCode> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let text = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        state.recorded.lock().unwrap().uploads.push(Upload {
            field: field_name,
            file_name,
            content_type,
            text,
        });
    }
    check_failure(&state)?;

    // The real backend numbers its questions; clients ignore the extra field.
    let mut generated: Vec<Value> = fixtures::questions(3)
        .into_iter()
        .enumerate()
        .map(|(idx, q)| {
            json!({
                "numero": idx + 1,
                "enunciado": q.enunciado,
                "alternativas": q.alternativas,
                "gabarito": q.gabarito,
                "habilidades_combinadas": q.habilidades_combinadas,
            })
        })
        .collect();
    if state.open_ended_last.load(Ordering::SeqCst) {
        if let Some(last) = generated.last_mut().and_then(Value::as_object_mut) {
            last.remove("alternativas");
            last.remove("gabarito");
        }
    }
    Ok(Json(json!({
        "session_id": "stub-session",
        "questoes_geradas": generated,
    })))
}

async fn submit_answers(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    state
        .recorded
        .lock()
        .unwrap()
        .submissions
        .push((id, body));
    check_failure(&state)?;

    let mut report = serde_json::to_value(fixtures::report())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    // The backend's own sample payload has no recommendations.
    if let Some(obj) = report.as_object_mut() {
        obj.remove("recomendacoes");
    }
    Ok(Json(json!({ "relatorio_diagnostico": report })))
}

async fn get_session(
    State(state): State<StubState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.recorded.lock().unwrap().lookups.push(id.clone());
    check_failure(&state)?;
    if id == "missing" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "session_id": id,
        "questao_original": "Resolva x² - 5x + 6 = 0",
        "questoes_geradas": fixtures::questions(3),
        "created_at": "2024-05-02T13:00:00",
        "submitted_at": null,
        "has_relatorio": false,
    })))
}

async fn health(State(state): State<StubState>) -> Result<Json<Value>, StatusCode> {
    check_failure(&state)?;
    Ok(Json(json!({
        "status": "ok",
        "app": "Kora",
        "version": "1.0.0",
    })))
}
