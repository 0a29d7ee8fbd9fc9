//! ocrclean - OCR text cleaning and document comparison
//!
//! Prepares prompts from template files, substitutes user-supplied text into
//! them, and forwards the result to a pluggable model gateway. Exactly one
//! operation runs per process invocation; there is no retained state across
//! invocations.
//!
//! # Modules
//!
//! - [`prompts`] - Template loading and placeholder substitution
//! - [`llm`] - Model gateway trait and deterministic stub
//! - [`ops`] - The clean and compare operations
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod ops;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, ModelConfig, PromptsConfig};
pub use llm::{GatewayError, ModelGateway, StubGateway};
pub use ops::CompareKind;
pub use prompts::{PromptError, PromptLoader, TemplateKind, render};
