// Gateway error taxonomy

use thiserror::Error;

/// Failures surfaced by the adapter. Both variants are terminal for the
/// current attempt; retries, timeouts and cancellation belong to the
/// transport behind the `StripeClient` trait.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The remote API answered but reported failure; carries the remote
    /// message verbatim.
    #[error("gateway rejected: {message}")]
    Rejected { message: String },
    /// Network, timeout or authentication failure at the remote client.
    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            message: message.into(),
        }
    }
}
