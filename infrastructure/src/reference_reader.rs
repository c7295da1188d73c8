//! Loads a reference question from disk as plain text.

use docx_rs::{read_docx, DocumentChild};
use shared::utils::{reference_format, ReferenceFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot extract text from PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },
    #[error("cannot parse DOCX {path}: {message}")]
    Docx { path: PathBuf, message: String },
    #[error("reference reader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Reads `path` off the async runtime; PDF and DOCX parsing are blocking.
pub async fn read_reference(path: impl AsRef<Path>) -> Result<String, ReferenceError> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || read_reference_blocking(&path)).await?
}

pub fn read_reference_blocking(path: &Path) -> Result<String, ReferenceError> {
    let format = reference_format(path);
    debug!(path = %path.display(), ?format, "reading reference question");
    match format {
        ReferenceFormat::PlainText => std::fs::read_to_string(path).map_err(|source| {
            ReferenceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }),
        ReferenceFormat::Pdf => {
            pdf_extract::extract_text(path).map_err(|e| ReferenceError::Pdf {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        ReferenceFormat::Docx => {
            let bytes = std::fs::read(path).map_err(|source| ReferenceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let docx = read_docx(&bytes).map_err(|e| ReferenceError::Docx {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            let mut text = String::new();
            for child in &docx.document.children {
                // Tables and section breaks carry no question text.
                if let DocumentChild::Paragraph(p) = child {
                    text.push_str(&p.raw_text());
                    text.push('\n');
                }
            }
            Ok(text)
        }
    }
}
