use application::PracticeService;
use domain::{AnswerSet, SessionGateway, SessionId};
use infrastructure::kora_client::{KoraClient, KoraClientError};
use serde_json::json;
use tests::{fixtures, StubBackend};

const REFERENCE: &str = "Uma loja vende camisetas a R$ 25,00.\nQuanto custam 3 camisetas?";

#[tokio::test]
async fn start_uploads_reference_as_text_attachment() {
    let backend = StubBackend::spawn().await;
    let client = KoraClient::new(&backend.url()).unwrap();

    let started = client.start_session(REFERENCE).await.unwrap();

    assert_eq!(started.session_id, SessionId::new("stub-session"));
    assert_eq!(started.questions, fixtures::questions(3));

    let uploads = backend.uploads();
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.field, "file");
    assert_eq!(upload.file_name.as_deref(), Some("questao.txt"));
    assert_eq!(upload.content_type.as_deref(), Some("text/plain"));
    assert_eq!(upload.text, REFERENCE);
}

#[tokio::test]
async fn submit_posts_answers_under_respostas() {
    let backend = StubBackend::spawn().await;
    let client = KoraClient::new(&backend.url()).unwrap();
    let answers: AnswerSet = [(1, "a"), (2, "b"), (3, "c")]
        .into_iter()
        .map(|(n, l)| (n, l.to_string()))
        .collect();

    let report = client
        .submit_answers(&SessionId::new("stub-session"), &answers)
        .await
        .unwrap();

    let expected = fixtures::report();
    assert_eq!(report.total_acertos, expected.total_acertos);
    assert_eq!(report.percentual_acerto, expected.percentual_acerto);
    assert_eq!(report.correcao_detalhada, expected.correcao_detalhada);
    assert_eq!(report.recomendacoes, "");

    assert_eq!(
        backend.submissions(),
        [(
            "stub-session".to_string(),
            json!({"respostas": {"1": "a", "2": "b", "3": "c"}})
        )]
    );
}

#[tokio::test]
async fn session_id_travels_as_a_single_segment() {
    let backend = StubBackend::spawn().await;
    let client = KoraClient::new(&backend.url()).unwrap();

    let snapshot = client.session(&SessionId::new("a/b c")).await.unwrap();

    assert_eq!(snapshot.session_id, "a/b c");
    assert_eq!(backend.lookups(), ["a/b c"]);
    assert_eq!(snapshot.questoes_geradas.len(), 3);
    assert!(!snapshot.has_relatorio);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let backend = StubBackend::spawn().await;
    let client = KoraClient::new(&backend.url()).unwrap();
    backend.fail_requests(true);

    let err = client.open_session(REFERENCE).await.unwrap_err();
    assert!(matches!(
        err,
        KoraClientError::Status { status, .. } if status.as_u16() == 500
    ));

    let err = client
        .send_answers(&SessionId::new("stub-session"), &AnswerSet::new())
        .await
        .unwrap_err();
    assert!(matches!(err, KoraClientError::Status { .. }));

    backend.fail_requests(false);
    let err = client.session(&SessionId::new("missing")).await.unwrap_err();
    assert!(matches!(
        err,
        KoraClientError::Status { status, .. } if status.as_u16() == 404
    ));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = KoraClient::new(&format!("http://{addr}")).unwrap();

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, KoraClientError::Transport { .. }));
}

#[tokio::test]
async fn health_reports_backend_identity() {
    let backend = StubBackend::spawn().await;
    let client = KoraClient::new(&backend.url()).unwrap();

    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.app, "Kora");
}

#[tokio::test]
async fn failed_request_populates_neither_session_nor_report() {
    let backend = StubBackend::spawn().await;
    let mut practice = PracticeService::new(KoraClient::new(&backend.url()).unwrap());

    backend.fail_requests(true);
    assert!(practice.start(REFERENCE).await.is_err());
    assert_eq!(practice.session_id(), None);

    backend.fail_requests(false);
    practice.start(REFERENCE).await.unwrap();
    for number in 1..=3 {
        practice.answer(number, "A").unwrap();
    }

    backend.fail_requests(true);
    assert!(practice.submit().await.is_err());
    assert_eq!(practice.report(), None);
    assert_eq!(practice.session_id(), Some(&SessionId::new("stub-session")));

    backend.fail_requests(false);
    let report = practice.submit().await.unwrap();
    assert_eq!(report.total_questoes, 3);
    assert_eq!(backend.uploads().len(), 2);
    assert_eq!(backend.submissions().len(), 2);
    assert_eq!(
        backend.submissions()[1].1,
        json!({"respostas": {"1": "a", "2": "a", "3": "a"}})
    );
}

#[tokio::test]
async fn question_without_alternatives_takes_a_typed_answer() {
    let backend = StubBackend::spawn().await;
    backend.open_ended_last(true);
    let mut practice = PracticeService::new(KoraClient::new(&backend.url()).unwrap());

    assert_eq!(practice.start(REFERENCE).await.unwrap(), 3);
    assert!(practice.questions()[2].alternativas.is_empty());
    assert_eq!(practice.questions()[2].gabarito, "");

    practice.answer(1, "a").unwrap();
    practice.answer(2, "b").unwrap();
    practice.answer(3, " x > 3 ").unwrap();
    practice.submit().await.unwrap();

    assert_eq!(
        backend.submissions()[0].1,
        json!({"respostas": {"1": "a", "2": "b", "3": "x > 3"}})
    );
}

#[tokio::test]
async fn reference_is_uploaded_byte_for_byte() {
    let backend = StubBackend::spawn().await;
    let mut practice = PracticeService::new(KoraClient::new(&backend.url()).unwrap());
    let code = "    def f(x):\n        return x\nQual o valor de f(2)?\n";

    practice.start(code).await.unwrap();

    assert_eq!(backend.uploads()[0].text, code);
}
