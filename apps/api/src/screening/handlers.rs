//! Axum route handlers for the Screening API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::errors::{AppError, MISSING_INPUT_PROMPT};
use crate::models::candidate::ScreeningOutcome;
use crate::screening::export::{to_csv, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
use crate::screening::page::{render_form, render_results};
use crate::screening::pipeline::screen;
use crate::screening::upload::{read_form, ScreeningForm};
use crate::state::AppState;

/// Runs the blocking pipeline off the async workers. Still one document at a time.
async fn run_screening(state: &AppState, form: ScreeningForm) -> Result<ScreeningOutcome, AppError> {
    let scorer = state.scorer.clone();
    let skill_matching = state.config.skill_matching;
    tokio::task::spawn_blocking(move || {
        screen(
            &form.job_description,
            &form.documents,
            scorer.as_ref(),
            skill_matching,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("screening task failed: {e}")))?
}

/// GET /
pub async fn handle_form() -> Html<String> {
    render_form("", None)
}

/// POST /screen
///
/// HTML flow. Missing input and rejected uploads re-render the form with a
/// prompt instead of an error.
pub async fn handle_screen_page(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    // The form is read in one pass, so a rejected file leaves no job description to echo back.
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(AppError::Validation(message)) => return Ok(render_form("", Some(&message))),
        Err(e) => return Err(e),
    };
    let job_description = form.job_description.clone();

    match run_screening(&state, form).await {
        Ok(outcome) => {
            let csv = to_csv(&outcome.results)?;
            Ok(render_results(&outcome, &csv))
        }
        Err(AppError::MissingInput) => Ok(render_form(&job_description, Some(MISSING_INPUT_PROMPT))),
        Err(e) => Err(e),
    }
}

/// POST /api/v1/screen
///
/// Returns the full ranking, keywords and per-file warnings as JSON.
pub async fn handle_screen(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningOutcome>, AppError> {
    let form = read_form(multipart).await?;
    let outcome = run_screening(&state, form).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/screen/export
///
/// Same input as `/api/v1/screen`; answers with the ranking as a CSV attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = read_form(multipart).await?;
    let outcome = run_screening(&state, form).await?;
    let csv = to_csv(&outcome.results)?;

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
