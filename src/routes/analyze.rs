use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use hypermodern_core::AnalysisResult;
use serde_json::Value;
use std::sync::Arc;

use crate::{error::ApiError, validation::parse_points, AppState};

/// Summarise a posted batch of labelled points
///
/// The body is validated in full before the analyzer runs; any invalid
/// field turns the whole request into a 422.
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(body) = body?;
    let points = parse_points(&body).map_err(ApiError::Validation)?;

    let result = state.analyzer.analyze(&points)?;
    Ok(Json(result))
}
