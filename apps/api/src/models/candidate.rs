use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::ExtractionWarning;

/// Placeholder for a field the extractor could not find.
pub const NOT_FOUND: &str = "Not Found";

/// One row of the ranking: a résumé with its extracted fields and relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Display name, taken from the uploaded file name.
    pub name: String,
    /// First email address found, or [`NOT_FOUND`].
    pub email: String,
    /// Matched vocabulary terms joined with ", ", or [`NOT_FOUND`].
    pub skills: String,
    /// Cosine similarity against the job description, 0.0 – 1.0.
    pub score: f64,
}

/// Full answer of one screening run. Built fresh per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Sorted by score descending; ties keep upload order.
    pub results: Vec<CandidateRecord>,
    /// Tokens of the job description, in order, for display only.
    pub keywords: Vec<String>,
    pub warnings: Vec<ExtractionWarning>,
}
