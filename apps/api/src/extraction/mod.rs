//! Document text extraction.
//!
//! A read failure never aborts a batch: the document contributes an empty
//! string and an [`ExtractionWarning`] that the caller shows next to its name.

pub mod pdf;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An uploaded résumé: raw PDF bytes plus the name it was uploaded under.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Non-fatal report that a document could not be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionWarning {
    pub document: String,
    pub message: String,
}

impl std::fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error reading {}: {}", self.document, self.message)
    }
}

/// Result of reading one document. `text` is empty whenever `warning` is set.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub warning: Option<ExtractionWarning>,
}
