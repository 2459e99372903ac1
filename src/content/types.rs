// src/content/types.rs
// Records served by the content store, in the shape the store returns them
// (camelCase fields, bilingual text, RFC 3339 timestamps).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of text carried in both site languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Renders "English (Arabic)" when both sides are present, otherwise
    /// whichever side exists.
    pub fn join(&self) -> String {
        match (self.en.trim(), self.ar.trim()) {
            ("", "") => String::new(),
            (en, "") => en.to_string(),
            ("", ar) => ar.to_string(),
            (en, ar) => format!("{} ({})", en, ar),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.en.trim().is_empty() && self.ar.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub category_id: String,
    pub name: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub subcategory_id: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    pub valid_until: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    pub date: DateTime<Utc>,
}

/// One point-in-time copy of everything the prompt needs. Fetched fresh per
/// request, never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub menu_items: Vec<MenuItem>,
    pub offers: Vec<Offer>,
    pub events: Vec<Event>,
}

fn default_true() -> bool {
    true
}
