use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanInsightsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanInsightsError {
    fn from(e: serde_json::Error) -> Self {
        LoanInsightsError::SerializationError(e.to_string())
    }
}
