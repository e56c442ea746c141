use ssq_core::BallError;

/// Error type for reading or writing combinations as text
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("ticket parse error: {message}")]
    Syntax { message: String },

    #[error("invalid ticket: {0}")]
    Ball(#[from] BallError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormatError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        FormatError::Syntax {
            message: message.into(),
        }
    }
}
