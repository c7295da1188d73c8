use anyhow::Context;
use domain::Report;
use shared::types::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON export of a received Raio-X. Nothing is added or reshaped.
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Pretty-printed with two-space indentation.
    pub fn to_json(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    pub fn from_json(&self, json: &str) -> Result<Report> {
        serde_json::from_str(json).context("report export is not valid JSON")
    }

    pub fn export(&self, report: &Report, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = self.to_json(report)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "report exported");
        Ok(path.to_path_buf())
    }

    pub fn import(&self, path: impl AsRef<Path>) -> Result<Report> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        self.from_json(&json)
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
