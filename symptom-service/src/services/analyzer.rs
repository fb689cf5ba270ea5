use crate::dtos::{AnalysisResponse, SymptomRequest};

/// Advisory served while the external AI integration is pending. Bullet
/// glyphs and line feeds are part of the client contract.
const GENERAL_ADVISORY: &str = "Based on your symptoms, here are some general possibilities:\n\n\
    Possible Conditions:\n\
    • Common cold or flu\n\
    • Seasonal allergies\n\
    • Stress-related symptoms\n\n\
    General Advice:\n\
    • Rest and stay hydrated\n\
    • Monitor your symptoms\n\
    • Avoid self-diagnosis\n\n\
    ⚠️ IMPORTANT: This is for informational purposes only. \
    Always consult a healthcare professional for proper diagnosis and treatment.";

/// Maps a symptom description to an advisory response.
///
/// Pure and deterministic: no I/O, no shared state, so handlers can call it
/// directly without blocking concerns.
#[derive(Debug, Clone, Default)]
pub struct SymptomAnalyzer;

impl SymptomAnalyzer {
    pub fn new() -> Self {
        Self
    }

    // TODO: Integrate with AI API later
    pub fn analyze(&self, _request: &SymptomRequest) -> AnalysisResponse {
        AnalysisResponse {
            result: GENERAL_ADVISORY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_is_never_empty() {
        let analyzer = SymptomAnalyzer::new();
        let response = analyzer.analyze(&SymptomRequest {
            symptoms: Some("fever".to_string()),
        });
        assert!(!response.result.is_empty());
    }

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = SymptomAnalyzer::new();
        let first = analyzer.analyze(&SymptomRequest {
            symptoms: Some("cough".to_string()),
        });
        let second = analyzer.analyze(&SymptomRequest { symptoms: None });
        assert_eq!(first.result, second.result);
    }

    #[test]
    fn advisory_keeps_contract_glyphs() {
        let analyzer = SymptomAnalyzer::new();
        let response = analyzer.analyze(&SymptomRequest { symptoms: None });
        assert!(response.result.starts_with("Based on your symptoms"));
        assert!(response.result.contains("• Common cold or flu"));
        assert!(response.result.contains("⚠️ IMPORTANT:"));
        assert!(response.result.contains("\n\nGeneral Advice:\n"));
    }
}
