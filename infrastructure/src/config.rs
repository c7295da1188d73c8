use dotenvy::dotenv;
use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REPORT_PATH: &str = "raio-x-kora.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
    pub report_path: String,
    pub log_filter: String,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            backend_url: non_empty("KORA_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            report_path: non_empty("KORA_REPORT_PATH")
                .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string()),
            log_filter: non_empty("KORA_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn with_backend_url(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        self
    }
}
