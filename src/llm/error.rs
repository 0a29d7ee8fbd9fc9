//! Model gateway error types

use thiserror::Error;

/// Errors that can occur at the model gateway boundary
///
/// Every variant is fatal to the current invocation; there is no retry.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
