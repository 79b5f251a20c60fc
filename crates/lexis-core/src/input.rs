//! Input normalization
//!
//! Turns typed text or a selected file's decoded bytes into a single
//! candidate document string for analysis.

use shared_types::FileSelection;
use thiserror::Error;

/// Extensions accepted by the file input surface (case-insensitive).
pub const TEXT_EXTENSIONS: [&str; 3] = [".txt", ".md", ".rtf"];

/// Advisory warning raised by the file path. Reported to the user but never
/// blocking: the file is still decoded, loaded, and submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileWarning {
    #[error("Only text, markdown, and RTF files are supported right now.")]
    UnsupportedFileType,
}

/// A document ready for submission. Only the normalizer constructs this, so
/// holding one guarantees the text is not empty or all-whitespace. Sent by
/// value: each request consumes the text it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DocumentText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed-text path. `None` means the submission is blocked: a precondition,
/// not a failure, so no error is raised and no request is issued. Accepted
/// text is passed through exactly as provided, with no trimming.
pub fn from_typed_text(current: &str) -> Option<DocumentText> {
    if current.trim().is_empty() {
        None
    } else {
        Some(DocumentText(current.to_owned()))
    }
}

/// Text-like heuristic: the declared MIME type begins with "text", or the
/// name carries a known text extension.
pub fn is_text_like(name: &str, declared_type: &str) -> bool {
    if declared_type.starts_with("text") {
        return true;
    }
    let lower = name.to_ascii_lowercase();
    TEXT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Result of loading a selected file.
#[derive(Debug, Clone)]
pub struct FileLoad {
    pub selection: FileSelection,
    /// Decoded content, lossy where the bytes were not valid UTF-8.
    pub text: String,
    /// Advisory only; the text above is usable regardless.
    pub warning: Option<FileWarning>,
}

/// File path. Decodes the bytes as text and classifies the file; an
/// unsupported type produces a warning, never a refusal.
pub fn from_file(name: &str, declared_type: &str, bytes: &[u8]) -> FileLoad {
    let warning = if is_text_like(name, declared_type) {
        None
    } else {
        Some(FileWarning::UnsupportedFileType)
    };

    FileLoad {
        selection: FileSelection {
            name: name.to_owned(),
            declared_type: declared_type.to_owned(),
        },
        text: String::from_utf8_lossy(bytes).into_owned(),
        warning,
    }
}
