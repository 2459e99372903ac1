// src/chat/mod.rs

pub mod language;
pub mod service;
pub mod validator;

pub use service::{ChatRequest, handle_chat};
