//! Document text extraction: turns an uploaded resume into plain text.
//!
//! Dispatch is on the filename suffix only. Unknown formats produce empty text
//! rather than an error so one odd upload still gets a (low) score.

pub mod docx;
pub mod pdf;

use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to parse {format} document '{name}': {reason}")]
    DocumentParse {
        name: String,
        format: &'static str,
        reason: String,
    },

    #[error("timed out after {limit:?} while processing '{name}'")]
    Timeout { name: String, limit: Duration },
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    WordProcessor,
    Unknown,
}

impl DocumentFormat {
    /// Case-sensitive suffix match, mirroring how uploads are named by the front-end.
    pub fn from_filename(name: &str) -> Self {
        if name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if name.ends_with(".docx") {
            DocumentFormat::WordProcessor
        } else {
            DocumentFormat::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::WordProcessor => "docx",
            DocumentFormat::Unknown => "unknown",
        }
    }
}

/// An uploaded resume: the client-supplied filename and the raw bytes.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub name: String,
    pub bytes: Bytes,
}

impl ResumeDocument {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_filename(&self.name)
    }
}

/// Extracts plain text from a resume.
pub fn extract_text(document: &ResumeDocument) -> Result<String, ExtractionError> {
    let format = document.format();
    let result = match format {
        DocumentFormat::Pdf => pdf::extract(&document.bytes),
        DocumentFormat::WordProcessor => docx::extract(&document.bytes),
        DocumentFormat::Unknown => {
            tracing::debug!(name = %document.name, "Unsupported resume format, using empty text");
            return Ok(String::new());
        }
    };

    result.map_err(|reason| ExtractionError::DocumentParse {
        name: document.name.clone(),
        format: format.label(),
        reason,
    })
}
