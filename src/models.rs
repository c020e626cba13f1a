use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Prediction API Models
// ============================================================================

/// Successful body of `GET /api/predict/{city}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PredictionResponse {
    pub city: String,
    pub image_url: String,
    pub predicted_aqi: AqiValue,
    pub category: String,
    pub health_advice: String,
}

/// AQI as sent by the backend, either a JSON number or a numeric string.
/// Only ever displayed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AqiValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for AqiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqiValue::Number(n) => write!(f, "{}", n),
            AqiValue::Text(s) => f.write_str(s),
        }
    }
}

/// Body returned with a non-success status
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetPredictionRequest {
    /// City identifier as offered by the city selector, e.g. "chicago"
    pub city: String,
}
