//! Server-rendered HTML for the screening form and the ranked results.

use axum::response::Html;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::models::candidate::ScreeningOutcome;
use crate::screening::export::EXPORT_FILE_NAME;
use crate::screening::upload::{JOB_DESCRIPTION_FIELD, RESUMES_FIELD};

const TITLE: &str = "Resume Screening &amp; Candidate Ranking";

pub fn render_form(job_description: &str, prompt: Option<&str>) -> Html<String> {
    let prompt_html = prompt
        .map(|p| format!(r#"<p class="warning">{}</p>"#, escape_html(p)))
        .unwrap_or_default();

    Html(layout(&format!(
        r#"{prompt_html}
<form method="post" action="/screen" enctype="multipart/form-data">
  <h2>Job Description</h2>
  <textarea name="{JOB_DESCRIPTION_FIELD}" rows="10" cols="100">{jd}</textarea>
  <h2>Upload Resumes</h2>
  <input type="file" name="{RESUMES_FIELD}" accept=".pdf,application/pdf" multiple>
  <p><button type="submit">Rank resumes</button></p>
</form>"#,
        jd = escape_html(job_description),
    )))
}

/// Results page. `csv` is embedded as a data URI so the download needs no second request.
pub fn render_results(outcome: &ScreeningOutcome, csv: &[u8]) -> Html<String> {
    let warnings: String = outcome
        .warnings
        .iter()
        .map(|w| format!(r#"<p class="warning">{}</p>"#, escape_html(&w.to_string())))
        .collect();

    let rows: String = outcome
        .results
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.4}</td></tr>",
                escape_html(&r.name),
                escape_html(&r.email),
                escape_html(&r.skills),
                r.score
            )
        })
        .collect();

    Html(layout(&format!(
        r#"<h2>Ranking Resumes</h2>
{warnings}
<p>Processed {count} resume(s).</p>
<h2>Ranked Resumes</h2>
<table>
  <thead><tr><th>Resume</th><th>Email</th><th>Skills</th><th>Score</th></tr></thead>
  <tbody>{rows}</tbody>
</table>
<h2>Keywords in Job Description</h2>
<p>Keywords: {keywords}</p>
<p><a download="{EXPORT_FILE_NAME}" href="data:text/csv;base64,{csv}">Download Results as CSV</a></p>
<p><a href="/">New screening</a></p>"#,
        count = outcome.results.len(),
        keywords = escape_html(&outcome.keywords.join(", ")),
        csv = STANDARD.encode(csv),
    )))
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{TITLE}</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem; }}
    table {{ border-collapse: collapse; }}
    th, td {{ border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }}
    .warning {{ color: #8a5a00; background: #fff4d6; padding: 0.4rem; }}
  </style>
</head>
<body>
<h1>{TITLE}</h1>
{body}
</body>
</html>"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractionWarning;
    use crate::models::candidate::CandidateRecord;
    use chrono::Utc;
    use uuid::Uuid;

    fn outcome() -> ScreeningOutcome {
        ScreeningOutcome {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            results: vec![CandidateRecord {
                name: "<script>.pdf".to_string(),
                email: "jane@example.com".to_string(),
                skills: "python, sql".to_string(),
                score: 0.5,
            }],
            keywords: vec!["python".to_string(), "sql".to_string()],
            warnings: vec![ExtractionWarning {
                document: "broken.pdf".to_string(),
                message: "invalid file header".to_string(),
            }],
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_form_shows_prompt_and_keeps_text() {
        let Html(body) = render_form("rust <dev>", Some("Please upload"));
        assert!(body.contains("Please upload"));
        assert!(body.contains("rust &lt;dev&gt;"));
        assert!(body.contains(r#"name="resumes""#));
    }

    #[test]
    fn test_results_page_lists_rows_warnings_and_keywords() {
        let Html(body) = render_results(&outcome(), b"Resume,Email,Skills,Score\n");
        assert!(body.contains("&lt;script&gt;.pdf"));
        assert!(!body.contains("<script>"));
        assert!(body.contains("Error reading broken.pdf: invalid file header"));
        assert!(body.contains("Keywords: python, sql"));
        assert!(body.contains("0.5000"));
    }

    #[test]
    fn test_results_page_embeds_csv_download() {
        let csv = b"Resume,Email,Skills,Score\n";
        let Html(body) = render_results(&outcome(), csv);
        assert!(body.contains(r#"download="ranked_resumes.csv""#));
        assert!(body.contains(&STANDARD.encode(csv)));
    }
}
