//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::prompts::build_assessment_prompt;
use crate::assessment::section::classify_product;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for POST /assess.
///
/// Every field defaults to an empty string: the browser form submits partial
/// bodies, and an absent or empty field is interpolated into the prompt as-is
/// rather than rejected.
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub change_description: String,
    #[serde(default)]
    pub product: String,
}

#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub report: String,
    pub report_filename: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /assess
///
/// Builds the impact-analysis prompt from the request fields and the master
/// document list, runs one completion, and returns the report text verbatim
/// together with a suggested download filename. Nothing is written to disk.
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, AppError> {
    let section = classify_product(&request.product);
    info!(
        "Assessing change: product={:?}, department={:?}, section={}",
        request.product, request.department, section
    );

    let prompt = build_assessment_prompt(
        &request.product,
        &request.department,
        &request.change_description,
        section,
        state.master_list.text(),
    );

    let report = state.analyst.analyze(&prompt).await?;

    Ok(Json(AssessResponse {
        report,
        report_filename: suggested_report_filename(),
    }))
}

/// Suggested download name for the report. Unique per request.
fn suggested_report_filename() -> String {
    format!("impact_report_{}.txt", Uuid::new_v4())
}
