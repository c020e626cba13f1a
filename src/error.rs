use thiserror::Error;

/// Why a prediction could not be shown. `Display` yields the text placed
/// after the page's error prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// No HTTP response was obtained
    #[error("{0}")]
    Transport(String),

    /// Non-success status with an `error` message in the body
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Non-success status without a usable `error` message
    #[error("HTTP error! status: {status}")]
    BackendUnstructured { status: u16 },

    /// Success status but the body is not a prediction
    #[error("{0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Backend,
    BackendUnstructured,
    MalformedResponse,
}

impl PredictionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictionError::Transport(_) => ErrorKind::Transport,
            PredictionError::Backend { .. } => ErrorKind::Backend,
            PredictionError::BackendUnstructured { .. } => ErrorKind::BackendUnstructured,
            PredictionError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            PredictionError::Backend { status, .. }
            | PredictionError::BackendUnstructured { status } => Some(*status),
            _ => None,
        }
    }

    /// Builds the failure for a non-success response from its status and raw body
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<crate::models::ErrorResponse>(body).unwrap_or_default();
        match parsed.error {
            Some(message) if !message.is_empty() => PredictionError::Backend { status, message },
            _ => PredictionError::BackendUnstructured { status },
        }
    }
}

impl From<reqwest::Error> for PredictionError {
    fn from(err: reqwest::Error) -> Self {
        PredictionError::Transport(err.to_string())
    }
}
