// src/lib.rs

pub mod api;
pub mod chat;
pub mod config;
pub mod content;
pub mod llm;
pub mod prompt;
pub mod state;
