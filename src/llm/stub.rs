//! Deterministic stub gateway
//!
//! Stands in for a real provider client. Responses are canned and keyed off
//! recognizable phrases from the bundled templates, which is enough to prove
//! that a well-formed prompt reached the boundary.

use tracing::{debug, info};

use super::{GatewayError, ModelGateway};

/// Canned response for prompts built from the clean-text template
const CLEANED_RESPONSE: &str = "Este es el texto limpio y procesado por el modelo.";

/// Canned response for prompts built from the quick-comparison template
const MATCH_RESPONSE: &str = "Coinciden sustancialmente";

/// Fallback response for any other prompt
const GENERIC_RESPONSE: &str = "Respuesta genérica del modelo.";

/// Deterministic, side-effect-free model gateway
#[derive(Debug, Default)]
pub struct StubGateway;

impl StubGateway {
    pub fn new() -> Self {
        Self
    }
}

impl ModelGateway for StubGateway {
    fn invoke(&self, prompt: &str, model: &str, api_key: Option<&str>) -> Result<String, GatewayError> {
        info!(%model, credential = api_key.is_some(), "Invoking model");
        debug!(prompt_len = prompt.len(), "Prompt handed to gateway");

        let response = if prompt.contains("limpio, sin comentarios") {
            CLEANED_RESPONSE
        } else if prompt.contains("Coinciden sustancialmente") {
            MATCH_RESPONSE
        } else {
            GENERIC_RESPONSE
        };

        Ok(response.to_string())
    }
}
