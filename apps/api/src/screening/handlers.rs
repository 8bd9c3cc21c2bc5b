//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::ResumeDocument;
use crate::models::score::ScoreRecord;
use crate::screening::pipeline::ScreeningRequest;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";

/// POST /api/v1/screen
///
/// Multipart form: `job_description` (text) and one or more `resumes` files.
/// Returns every resume as a ScoreRecord, best match first.
pub async fn handle_screen(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<ScoreRecord>>, AppError> {
    let mut job_description = String::new();
    let mut resumes = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => job_description = field.text().await?,
            Some(RESUMES_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part for an untouched file input.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                resumes.push(ResumeDocument::new(file_name, bytes));
            }
            other => debug!(field = ?other, "Ignoring unexpected multipart field"),
        }
    }

    let records = state
        .screener
        .screen(ScreeningRequest {
            job_description,
            resumes,
        })
        .await?;

    Ok(Json(records))
}
