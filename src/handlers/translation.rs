use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::data::models::{TranslateRequest, TranslationResult, TranslationStatistics};
use crate::error::ApiError;
use crate::state::AppState;

// POST /traduccion
pub async fn translate(
    State(state): State<AppState>,
    request: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslationResult>, ApiError> {
    let Json(request) = request?;
    request.validate()?;

    let result = state.translation.translate(&request.text, request.direction);
    log::debug!(
        "Translated {:?} ({:?}) with confidence {}",
        request.text,
        request.direction,
        result.confidence
    );
    Ok(Json(result))
}

pub async fn statistics(State(state): State<AppState>) -> Json<TranslationStatistics> {
    Json(state.translation.statistics())
}
