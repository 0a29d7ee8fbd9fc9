//! ModelGateway trait definition

use super::GatewayError;

/// Stateless model gateway - each call is independent
///
/// One finished prompt in, one text response out. No conversation state is
/// kept between calls, and the call blocks until the response is complete.
pub trait ModelGateway: Send + Sync {
    /// Send a prompt to the named model and return its text response
    ///
    /// The credential is optional; implementations that require one surface
    /// its absence as [`GatewayError::Auth`].
    fn invoke(&self, prompt: &str, model: &str, api_key: Option<&str>) -> Result<String, GatewayError>;
}
