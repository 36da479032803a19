//! Relevance scoring — pluggable, trait-based scorer that measures résumé texts vs a job description.
//!
//! Default: `TfidfScorer` (per-run TF-IDF fit, cosine similarity, deterministic).
//!
//! `AppState` holds an `Arc<dyn RelevanceScorer>`, chosen at startup.

use tracing::debug;

use crate::screening::tfidf::{cosine_similarity, fit_transform, tokenize};

/// The relevance scorer trait. Implement this to swap backends without touching
/// the pipeline or handler code.
pub trait RelevanceScorer: Send + Sync {
    /// Returns one score in `[0, 1]` per entry of `resumes`, in the same order.
    fn score(&self, job_description: &str, resumes: &[String]) -> Vec<f64>;

    /// Short label surfaced in logs.
    fn backend(&self) -> &'static str;
}

/// TF-IDF cosine scorer. The vocabulary and idf weights come from this call's
/// corpus only (`[job_description] + resumes`); nothing is carried between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfidfScorer;

impl RelevanceScorer for TfidfScorer {
    fn score(&self, job_description: &str, resumes: &[String]) -> Vec<f64> {
        let corpus: Vec<&str> = std::iter::once(job_description)
            .chain(resumes.iter().map(String::as_str))
            .collect();
        let matrix = fit_transform(&corpus);
        debug!(
            documents = corpus.len(),
            vocabulary = matrix.vocabulary.len(),
            "Fitted TF-IDF matrix"
        );

        let Some((job_vector, resume_vectors)) = matrix.rows.split_first() else {
            return Vec::new();
        };
        resume_vectors
            .iter()
            .map(|resume| cosine_similarity(job_vector, resume))
            .collect()
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Tokens of the job description as shown to the user. Display only; the
/// scorer tokenizes independently.
pub fn job_keywords(job_description: &str) -> Vec<String> {
    tokenize(job_description)
}
