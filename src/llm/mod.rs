//! Model gateway
//!
//! The boundary abstraction for LLM provider calls. [`ModelGateway`] has a
//! single production-relevant method; [`StubGateway`] is the deterministic
//! reference implementation the CLI runs against. A networked provider
//! client would slot in behind the same trait.

mod error;
pub mod gateway;
mod stub;

pub use error::GatewayError;
pub use gateway::ModelGateway;
pub use stub::StubGateway;
