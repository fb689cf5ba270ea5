use crate::dtos::{AnalysisResponse, SymptomRequest};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

/// `POST /api/analyze`: decode the symptom description and return an advisory.
///
/// The extractor result is matched by hand so any undecodable body maps to a
/// 400 rather than axum's default rejection statuses.
pub async fn analyze_symptoms(
    State(state): State<AppState>,
    payload: Result<Json<SymptomRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid request body: {}", e)))?;

    // Symptom text is medical data; log only its size.
    tracing::info!(
        symptoms_len = request.symptoms.as_deref().map_or(0, str::len),
        "Symptom analysis requested"
    );

    let response: AnalysisResponse = state.analyzer.analyze(&request);

    Ok(Json(response))
}
