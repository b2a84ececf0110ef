#![doc = include_str!("../README.md")]

pub mod client;
pub(crate) mod streaming;

pub use client::Zai;

// Re-export zai-types for convenience
pub use zai_types::{ChatCompletion, ChatError, CompletionRequest, DeltaSink, Message, Role};
