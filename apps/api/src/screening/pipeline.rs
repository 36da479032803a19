//! Screening pipeline: extract text → extract fields → score → sort.
//!
//! Documents are processed one at a time. A document that cannot be read still
//! produces a row (sentinel fields, score 0.0) plus a warning.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{pdf::extract_text, Document, ExtractionWarning};
use crate::models::candidate::{CandidateRecord, ScreeningOutcome};
use crate::screening::fields::{extract_fields, SkillMatching};
use crate::screening::scorer::{job_keywords, RelevanceScorer};

/// Runs one screening invocation. Nothing is kept once it returns.
///
/// Returns `AppError::MissingInput` when the job description is blank or no
/// documents were supplied.
pub fn screen(
    job_description: &str,
    documents: &[Document],
    scorer: &dyn RelevanceScorer,
    skill_matching: SkillMatching,
) -> Result<ScreeningOutcome, AppError> {
    if job_description.trim().is_empty() || documents.is_empty() {
        return Err(AppError::MissingInput);
    }

    let run_id = Uuid::new_v4();
    let total = documents.len();
    let mut texts = Vec::with_capacity(total);
    let mut records = Vec::with_capacity(total);
    let mut warnings: Vec<ExtractionWarning> = Vec::new();

    for (i, document) in documents.iter().enumerate() {
        info!(%run_id, "Processing {}/{}: {}...", i + 1, total, document.name);
        let extracted = extract_text(document);
        if let Some(warning) = extracted.warning {
            warnings.push(warning);
        }
        let fields = extract_fields(&extracted.text, skill_matching);
        records.push(CandidateRecord {
            name: document.name.clone(),
            email: fields.email_or_sentinel(),
            skills: fields.skills_or_sentinel(),
            score: 0.0,
        });
        texts.push(extracted.text);
    }
    info!(%run_id, failed = warnings.len(), "Processing complete!");

    let scores = scorer.score(job_description, &texts);
    let results = rank(records, &scores);
    info!(
        %run_id,
        backend = scorer.backend(),
        candidates = results.len(),
        top_score = results.first().map(|r| r.score).unwrap_or(0.0),
        "Ranked resumes"
    );

    Ok(ScreeningOutcome {
        run_id,
        generated_at: Utc::now(),
        results,
        keywords: job_keywords(job_description),
        warnings,
    })
}

/// Attaches `scores` to `records` positionally and sorts by score descending.
/// The sort is stable, so equal scores keep upload order.
pub fn rank(mut records: Vec<CandidateRecord>, scores: &[f64]) -> Vec<CandidateRecord> {
    for (record, score) in records.iter_mut().zip(scores) {
        record.score = *score;
    }
    records.sort_by(|a, b| b.score.total_cmp(&a.score));
    records
}
