// src/chat/validator.rs
// Input filter for the chat endpoint. Ordered denylist, first failure wins.
// Best effort only; this is not a security boundary.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

pub const MAX_MESSAGE_CHARS: usize = 500;

pub const REASON_EMPTY: &str = "Message cannot be empty.";
pub const REASON_TOO_LONG: &str = "Message is too long (maximum 500 characters).";
pub const REASON_MARKUP: &str = "Message contains HTML or script content that is not allowed.";
pub const REASON_INJECTION: &str = "Message contains disallowed patterns.";

// Angle-bracket tokens plus the usual scheme/attribute markers.
static RE_MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<[^>]+>|javascript:|data:|vbscript:|\bon\w+\s*=").expect("valid regex")
});

// SQL keyword followed by a clause keyword, across newlines.
static RE_SQL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\b(select|insert|update|delete|drop|union|alter)\b.*\b(from|table|into)\b")
        .expect("valid regex")
});

// Path traversal and shell-ish substrings.
static RE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.\./|/etc/passwd|cmd\.exe|bin/sh").expect("valid regex"));

/// Checks one inbound chat message. Returns the trimmed text on success and
/// the rejection reason otherwise.
///
/// Takes the raw JSON value so that a missing, null, or non-string `message`
/// field lands on the empty-input rule instead of a deserialization error.
/// Every rejection logs the offending input unredacted.
pub fn validate_message(message: &Value) -> Result<&str, &'static str> {
    let Some(text) = message.as_str() else {
        warn!("rejected chat message (not text): {}", message);
        return Err(REASON_EMPTY);
    };

    let text = text.trim();
    if text.is_empty() {
        warn!("rejected chat message (empty)");
        return Err(REASON_EMPTY);
    }

    if text.chars().count() > MAX_MESSAGE_CHARS {
        warn!(
            "rejected chat message ({} chars): {}",
            text.chars().count(),
            text
        );
        return Err(REASON_TOO_LONG);
    }

    if RE_MARKUP.is_match(text) {
        warn!("rejected chat message (markup): {}", text);
        return Err(REASON_MARKUP);
    }

    if RE_SQL.is_match(text) || RE_PATH.is_match(text) {
        warn!("rejected chat message (injection pattern): {}", text);
        return Err(REASON_INJECTION);
    }

    Ok(text)
}
