//! CSV export of a ranked result set, and the matching reader.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;

pub const EXPORT_FILE_NAME: &str = "ranked_resumes.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// One CSV row; header names match the on-screen table.
#[derive(Debug, Serialize, Deserialize)]
struct ExportRow {
    #[serde(rename = "Resume")]
    resume: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Skills")]
    skills: String,
    #[serde(rename = "Score")]
    score: f64,
}

impl From<&CandidateRecord> for ExportRow {
    fn from(r: &CandidateRecord) -> Self {
        Self {
            resume: r.name.clone(),
            email: r.email.clone(),
            skills: r.skills.clone(),
            score: r.score,
        }
    }
}

impl From<ExportRow> for CandidateRecord {
    fn from(row: ExportRow) -> Self {
        Self {
            name: row.resume,
            email: row.email,
            skills: row.skills,
            score: row.score,
        }
    }
}

/// Serializes `results` as UTF-8 CSV with a header row, preserving order.
pub fn to_csv(results: &[CandidateRecord]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if results.is_empty() {
        writer.write_record(["Resume", "Email", "Skills", "Score"])?;
    }
    for record in results {
        writer.serialize(ExportRow::from(record))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))
}

/// Reads back a file produced by [`to_csv`].
#[allow(dead_code)]
pub fn from_csv(data: &[u8]) -> Result<Vec<CandidateRecord>, AppError> {
    let mut reader = csv::Reader::from_reader(data);
    reader
        .deserialize::<ExportRow>()
        .map(|row| row.map(CandidateRecord::from).map_err(AppError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CandidateRecord> {
        vec![
            CandidateRecord {
                name: "jane doe.pdf".to_string(),
                email: "jane@example.com".to_string(),
                skills: "python, sql".to_string(),
                score: 0.17856621555757476,
            },
            CandidateRecord {
                name: "quote \"nick\" name.pdf".to_string(),
                email: "Not Found".to_string(),
                skills: "Not Found".to_string(),
                score: 0.0,
            },
        ]
    }

    #[test]
    fn test_header_row_and_column_order() {
        let csv = String::from_utf8(to_csv(&sample()).unwrap()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Resume,Email,Skills,Score");
    }

    #[test]
    fn test_comma_joined_skills_are_quoted() {
        let csv = String::from_utf8(to_csv(&sample()).unwrap()).unwrap();
        assert!(csv.contains("\"python, sql\""), "got {csv}");
    }

    #[test]
    fn test_export_then_parse_preserves_rows() {
        let records = sample();
        let parsed = from_csv(&to_csv(&records).unwrap()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_results_still_have_header() {
        let csv = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv.trim_end(), "Resume,Email,Skills,Score");
        assert!(from_csv(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_unicode_names_survive() {
        let records = vec![CandidateRecord {
            name: "résumé-josé.pdf".to_string(),
            email: "jose@example.es".to_string(),
            skills: "machine learning".to_string(),
            score: 1.0,
        }];
        let bytes = to_csv(&records).unwrap();
        assert!(std::str::from_utf8(&bytes).is_ok());
        assert_eq!(from_csv(&bytes).unwrap(), records);
    }
}
