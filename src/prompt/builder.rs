// src/prompt/builder.rs

use chrono::{DateTime, Utc};

use crate::content::{ContentSnapshot, MenuItem};
use crate::prompt::{RESTAURANT_HOURS, RESTAURANT_LOCATION, RESTAURANT_NAME};

/// Renders the full system prompt from a snapshot. `now` decides which
/// offers are still valid and which events count as upcoming.
pub fn build_prompt(snapshot: &ContentSnapshot, now: DateTime<Utc>) -> String {
    let mut sections: Vec<String> = Vec::new();

    // 1. Persona and tone
    sections.push(format!(
        "You are the virtual host of {RESTAURANT_NAME}, a Levantine restaurant and cafe in \
         Doha. Welcome guests warmly, the way a host greets them at the door, and answer \
         their questions about the menu, offers, events, opening hours, and location."
    ));

    // 2. Language mirroring
    sections.push(
        "Always reply in the language the guest used: Arabic in Arabic, English in English. \
         If a message mixes both, follow the language of the latest message."
            .to_string(),
    );

    // 3. House rules
    sections.push(
        "House rules:\n\
         1) Always encourage guests to book a table through the reservations page on the website.\n\
         2) There is no delivery service. If asked, say so politely and suggest booking a table instead.\n\
         3) When guests ask what the place looks like, point them to the photo gallery page on the website.\n\
         4) Keep answers short and friendly, two or three sentences when possible."
            .to_string(),
    );

    // 4. Fixed facts
    sections.push(format!(
        "About the restaurant: {RESTAURANT_NAME} is located on {RESTAURANT_LOCATION}, \
         {RESTAURANT_HOURS}. All prices are in Qatari Riyal (QR)."
    ));

    // 5. Menu, grouped category -> subcategory -> available items
    if let Some(menu) = render_menu(snapshot) {
        sections.push(menu);
    }

    // 6. Offers still valid at request time
    if let Some(offers) = render_offers(snapshot, now) {
        sections.push(offers);
    }

    // 7. Upcoming events
    if let Some(events) = render_events(snapshot, now) {
        sections.push(events);
    }

    sections.join("\n\n")
}

fn render_menu(snapshot: &ContentSnapshot) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();

    for category in &snapshot.categories {
        for subcategory in snapshot
            .subcategories
            .iter()
            .filter(|s| s.category_id == category.id)
        {
            let items: Vec<&MenuItem> = snapshot
                .menu_items
                .iter()
                .filter(|i| i.subcategory_id == subcategory.id && i.is_available)
                .collect();
            if items.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!(
                "{} / {}:",
                category.name.join(),
                subcategory.name.join()
            ));
            for item in items {
                lines.push(render_item(item));
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(format!("Menu (all prices in QR):\n\n{}", lines.join("\n")))
    }
}

fn render_item(item: &MenuItem) -> String {
    let mut line = format!("- {}: {} QR", item.name.join(), item.price);
    if item.is_featured {
        line.push_str(" (signature dish)");
    }
    if let Some(description) = &item.description {
        if !description.is_empty() {
            line.push_str(". ");
            line.push_str(&description.join());
        }
    }
    line
}

fn render_offers(snapshot: &ContentSnapshot, now: DateTime<Utc>) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();

    for offer in snapshot.offers.iter().filter(|o| o.valid_until > now) {
        let mut line = format!(
            "- {}: valid until {}",
            offer.title.join(),
            offer.valid_until.format("%Y-%m-%d")
        );
        if let Some(description) = &offer.description {
            if !description.is_empty() {
                line.push_str(". ");
                line.push_str(&description.join());
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        None
    } else {
        Some(format!("Current offers:\n{}", lines.join("\n")))
    }
}

fn render_events(snapshot: &ContentSnapshot, now: DateTime<Utc>) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();

    for event in snapshot.events.iter().filter(|e| e.date > now) {
        let mut line = format!(
            "- {} on {}",
            event.title.join(),
            event.date.format("%Y-%m-%d")
        );
        if let Some(description) = &event.description {
            if !description.is_empty() {
                line.push_str(". ");
                line.push_str(&description.join());
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        None
    } else {
        Some(format!("Upcoming events:\n{}", lines.join("\n")))
    }
}
