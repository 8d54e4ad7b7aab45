//! Error types for cloud functions

use thiserror::Error;

/// Errors that can occur while decoding input for, or running, a function
#[derive(Error, Debug)]
pub enum FunctionError {
    /// The body held no JSON value at all (empty or whitespace only).
    #[error("EOF")]
    EmptyBody,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FunctionError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            FunctionError::EmptyBody
            | FunctionError::Json(_)
            | FunctionError::InvalidPayload(_) => 400,
            FunctionError::Internal(_) => 500,
        }
    }

    /// Convert to a plain-text Response carrying the error message
    pub fn to_response(&self) -> crate::Response {
        crate::Response::text(self.status_code(), self.to_string())
    }
}

impl From<FunctionError> for crate::Response {
    fn from(err: FunctionError) -> Self {
        err.to_response()
    }
}
