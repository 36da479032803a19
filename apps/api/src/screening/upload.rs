//! Multipart form decoding for screening requests.

use axum::extract::Multipart;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::Document;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUMES_FIELD: &str = "resumes";

/// Decoded screening form: the job description and the uploaded résumés in upload order.
#[derive(Debug, Default)]
pub struct ScreeningForm {
    pub job_description: String,
    pub documents: Vec<Document>,
}

pub async fn read_form(mut multipart: Multipart) -> Result<ScreeningForm, AppError> {
    let mut form = ScreeningForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                form.job_description = field.text().await?;
            }
            Some(RESUMES_FIELD) => {
                let name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;

                // Browsers send an empty part when the file input is left blank.
                if name.is_empty() && bytes.is_empty() {
                    continue;
                }
                if !is_pdf_upload(&name, content_type.as_deref()) {
                    return Err(AppError::Validation(format!(
                        "Only PDF files are accepted, got '{name}'"
                    )));
                }
                debug!(document = %name, size = bytes.len(), "Received resume upload");
                form.documents.push(Document::new(name, bytes));
            }
            other => {
                debug!(field = ?other, "Ignoring unknown form field");
            }
        }
    }

    Ok(form)
}

/// Accepts by extension or declared type; the bytes themselves are judged at extraction.
pub fn is_pdf_upload(file_name: &str, content_type: Option<&str>) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || file_name.to_ascii_lowercase().ends_with(".pdf")
}
