// Résumé screening: field extraction, TF-IDF relevance scoring, ranking and export.
// One request = one independent run; nothing is cached between runs.

pub mod export;
pub mod fields;
pub mod handlers;
pub mod page;
pub mod pipeline;
pub mod scorer;
pub mod tfidf;
pub mod upload;
