//! nb-core: Core types and traits for newsbrief
//!
//! This crate provides the foundational types used throughout the
//! newsbrief agent service: the error taxonomy, chat messages, the
//! provider and tool contracts, and the one-shot agent loop.

pub mod agent;
pub mod error;
pub mod message;
pub mod provider;
pub mod tool;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use agent::{AgentConfig, AgentRunner, DEFAULT_MAX_TURNS};
pub use error::Error;
pub use message::{Message, Role, ToolCall, Usage};
pub use provider::{CompletionRequest, CompletionResponse, FinishReason, Provider};
pub use tool::{PropertySchema, Tool, ToolDefinition, ToolOutput, ToolParameters, ToolRegistry};

pub type Result<T> = std::result::Result<T, Error>;
