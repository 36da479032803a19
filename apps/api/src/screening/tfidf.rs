//! TF-IDF vectorization fitted per run, plus cosine similarity.
//!
//! Weighting: raw term count × smoothed idf, `ln((1 + n) / (1 + df)) + 1`,
//! then every row is L2-normalized. The vocabulary is sorted so that
//! summation order, and therefore every score, is reproducible bit for bit.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

// Unicode word characters, two or more of them.
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Lowercases `text` and splits it into word tokens, keeping order and duplicates.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE_TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse row: vocabulary index → weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector(BTreeMap<usize, f64>);

impl SparseVector {
    pub fn norm(&self) -> f64 {
        self.0.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        // Walk the shorter row, look up in the longer one.
        let (small, large) = if self.0.len() <= other.0.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .0
            .iter()
            .filter_map(|(idx, w)| large.0.get(idx).map(|v| w * v))
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(&index).copied().unwrap_or(0.0)
    }
}

/// Document-term matrix for one corpus.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    pub vocabulary: BTreeMap<String, usize>,
    pub idf: Vec<f64>,
    pub rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    #[allow(dead_code)]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

/// Fits the vocabulary and idf weights on `corpus` and returns its L2-normalized rows.
pub fn fit_transform<S: AsRef<str>>(corpus: &[S]) -> TfidfMatrix {
    let counts: Vec<BTreeMap<String, u32>> = corpus
        .iter()
        .map(|doc| {
            let mut tf: BTreeMap<String, u32> = BTreeMap::new();
            for token in tokenize(doc.as_ref()) {
                *tf.entry(token).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for tf in &counts {
        for term in tf.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = corpus.len() as f64;
    let mut vocabulary = BTreeMap::new();
    let mut idf = Vec::with_capacity(document_frequency.len());
    for (index, (term, df)) in document_frequency.iter().enumerate() {
        vocabulary.insert(term.to_string(), index);
        idf.push(((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0);
    }

    let rows = counts
        .iter()
        .map(|tf| {
            let mut row = SparseVector(
                tf.iter()
                    .map(|(term, count)| {
                        let index = vocabulary[term.as_str()];
                        (index, *count as f64 * idf[index])
                    })
                    .collect(),
            );
            let norm = row.norm();
            if norm > 0.0 {
                for w in row.0.values_mut() {
                    *w /= norm;
                }
            }
            row
        })
        .collect();

    TfidfMatrix {
        vocabulary,
        idf,
        rows,
    }
}

/// Cosine similarity of two non-negative vectors, in `[0, 1]`.
/// A zero vector on either side, or no shared term, scores exactly `+0.0`.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    // An empty f64 sum is -0.0, which would sort below +0.0 under total_cmp.
    let dot = a.dot(b);
    if denom == 0.0 || dot <= 0.0 {
        return 0.0;
    }
    (dot / denom).min(1.0)
}
