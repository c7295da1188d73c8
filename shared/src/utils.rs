use std::path::Path;

/// How a reference-question file is turned into plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFormat {
    PlainText,
    Pdf,
    Docx,
}

pub fn reference_format(path: &Path) -> ReferenceFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "pdf" => ReferenceFormat::Pdf,
        "docx" => ReferenceFormat::Docx,
        _ => ReferenceFormat::PlainText,
    }
}

/// Shortens `text` to at most `max_chars` characters, appending "..." when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
