//! Axum route handlers for the stateless Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub report_text: String,
}

/// POST /api/v1/analyze
///
/// Analyzes a report without touching the page state.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.report_text.trim().is_empty() {
        return Err(AppError::Validation(
            "report_text cannot be empty".to_string(),
        ));
    }

    let result = state.analyzer.analyze(&request.report_text).await?;

    Ok(Json(result))
}
