//! nb-providers: LLM provider implementations for newsbrief.

pub mod openai;

pub use openai::OpenAIProvider;
