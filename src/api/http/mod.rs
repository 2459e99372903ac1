// src/api/http/mod.rs

pub mod chat;
pub mod health;
pub mod router;

pub use router::build_router;
