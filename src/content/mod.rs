// src/content/mod.rs

pub mod store;
pub mod types;

pub use store::{ContentApiClient, ContentStore};
pub use types::{Category, ContentSnapshot, Event, LocalizedText, MenuItem, Offer, Subcategory};
