// src/llm/mod.rs

pub mod client;
pub mod schema;

pub use client::CompletionClient;
pub use schema::{ChatMessage, Role};
