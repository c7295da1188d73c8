use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A generated multiple-choice question as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub enunciado: String,
    /// Letter -> alternative text. Kept sorted so rendering is stable.
    /// Empty when the backend could not build alternatives; such questions
    /// take a typed answer.
    #[serde(default)]
    pub alternativas: BTreeMap<String, String>,
    #[serde(default)]
    pub gabarito: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habilidades_combinadas: Option<Vec<String>>,
}

impl Question {
    /// Looks up the backend's key for `letter`, ignoring case and surrounding spaces.
    pub fn alternative_key(&self, letter: &str) -> Option<&str> {
        let wanted = letter.trim();
        self.alternativas
            .keys()
            .find(|key| key.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    pub fn skills(&self) -> &[String] {
        self.habilidades_combinadas.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionItem {
    pub questao: String,
    pub sua_resposta: String,
    pub gabarito_correto: String,
    pub acertou: bool,
    pub feedback: String,
}

/// Diagnostic report ("Raio-X") for a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_questoes: u32,
    pub total_acertos: u32,
    pub percentual_acerto: f64,
    pub resumo: String,
    pub correcao_detalhada: Vec<CorrectionItem>,
    pub habilidades_a_revisar: Vec<String>,
    #[serde(default)]
    pub recomendacoes: String,
}

impl Report {
    pub fn missed(&self) -> impl Iterator<Item = &CorrectionItem> {
        self.correcao_detalhada.iter().filter(|item| !item.acertou)
    }
}

/// Server-side view of a session, as returned by `GET /api/v1/session/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    #[serde(default)]
    pub questao_original: String,
    #[serde(default)]
    pub questoes_geradas: Vec<Question>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub has_relatorio: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub version: String,
}
