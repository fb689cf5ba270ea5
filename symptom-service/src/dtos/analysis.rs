use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
///
/// The mobile client sends `{"symptoms": "..."}`; the field stays optional so
/// older clients posting an empty object are still served.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub result: String,
}
