// src/chat/language.rs
// Language handling for the concierge. The model mirrors the guest's
// language on its own; this module only picks which canned apology to use
// when the completion API returns nothing usable.

pub const APOLOGY_EN: &str =
    "Sorry, I could not process your request right now. Please try again.";
pub const APOLOGY_AR: &str = "عذراً، لم أتمكن من معالجة طلبك الآن. يرجى المحاولة مرة أخرى.";

/// True when the text contains at least one character from the Arabic
/// script blocks (including the presentation forms).
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c,
            '\u{0600}'..='\u{06FF}'
                | '\u{0750}'..='\u{077F}'
                | '\u{08A0}'..='\u{08FF}'
                | '\u{FB50}'..='\u{FDFF}'
                | '\u{FE70}'..='\u{FEFF}'
        )
    })
}

/// The apology shown when the upstream response carries no choice text,
/// matched to the language the guest wrote in.
pub fn fallback_reply(message: &str) -> &'static str {
    if contains_arabic(message) {
        APOLOGY_AR
    } else {
        APOLOGY_EN
    }
}
