//! Markup assembly for the grid, search result, and notices. Pure
//! string builders so the output can be checked without a DOM; the
//! components inject these strings via `inner_html`.

use crate::item::Item;
use crate::text::{escape_html, format_price};

pub const NO_DESCRIPTION: &str = "No description provided.";

/// First 8 characters of an identifier, marked as abbreviated. The
/// full id stays in the tooltip and the `data-id` copy target.
pub fn short_id(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

fn description_text(item: &Item) -> &str {
    match item.description.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => NO_DESCRIPTION,
    }
}

pub fn item_card(item: &Item) -> String {
    format!(
        concat!(
            r#"<div class="item-card">"#,
            "<h3>{name}</h3>",
            r#"<div class="item-price">{price}</div>"#,
            r#"<p class="item-desc">{desc}</p>"#,
            r#"<span class="item-id" data-id="{id}" title="Click to copy ID">ID: {short}</span>"#,
            "</div>"
        ),
        name = escape_html(&item.name),
        price = format_price(item.price),
        desc = escape_html(description_text(item)),
        id = escape_html(&item.id),
        short = escape_html(&short_id(&item.id)),
    )
}

/// Highlighted card for a successful lookup. The identifier is shown
/// in full, as plain text, with no copy target.
pub fn search_card(item: &Item) -> String {
    format!(
        concat!(
            r#"<div class="item-card found">"#,
            "<h3>{name}</h3>",
            r#"<div class="item-price">{price}</div>"#,
            r#"<p class="item-desc">{desc}</p>"#,
            r#"<span class="item-id">ID: {id}</span>"#,
            "</div>"
        ),
        name = escape_html(&item.name),
        price = format_price(item.price),
        desc = escape_html(description_text(item)),
        id = escape_html(&item.id),
    )
}

pub fn grid(items: &[Item]) -> String {
    if items.is_empty() {
        return r#"<div class="message" style="grid-column: 1/-1;">No items in inventory.</div>"#
            .to_string();
    }
    items.iter().map(item_card).collect()
}

pub fn loader(text: &str) -> String {
    format!(r#"<div class="loader">{}</div>"#, escape_html(text))
}

pub fn notice(kind: &str, text: &str) -> String {
    format!(
        r#"<div class="message {}">{}</div>"#,
        kind,
        escape_html(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: f64, description: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn empty_grid_renders_only_the_empty_notice() {
        let markup = grid(&[]);
        assert!(markup.contains("No items in inventory."));
        assert!(!markup.contains("item-card"));
    }

    #[test]
    fn grid_renders_one_card_per_item() {
        let items = vec![
            item("aaaabbbbcccc", "Plasma Coil", 12.5, Some("spare")),
            item("ddddeeeeffff", "Flux Capacitor", 88.0, None),
        ];
        let markup = grid(&items);
        assert_eq!(markup.matches("item-card").count(), 2);
        assert!(markup.contains("Plasma Coil"));
        assert!(markup.contains("$88.00"));
    }

    #[test]
    fn card_abbreviates_the_identifier_and_keeps_the_full_copy_target() {
        let markup = item_card(&item("0123456789abcdef", "Widget", 1.0, None));
        assert!(markup.contains("ID: 01234567..."));
        assert!(markup.contains(r#"data-id="0123456789abcdef""#));
    }

    #[test]
    fn card_falls_back_when_the_description_is_missing_or_empty() {
        let absent = item_card(&item("id", "A", 1.0, None));
        let empty = item_card(&item("id", "B", 1.0, Some("")));
        assert!(absent.contains(NO_DESCRIPTION));
        assert!(empty.contains(NO_DESCRIPTION));
    }

    #[test]
    fn card_escapes_server_supplied_text() {
        let markup = item_card(&item(
            "id",
            "<script>alert(1)</script>",
            1.0,
            Some("a & b"),
        ));
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("a &amp; b"));
    }

    #[test]
    fn search_card_shows_the_full_identifier_without_a_copy_target() {
        let markup = search_card(&item("0123456789abcdef", "Widget", 9.005, None));
        assert!(markup.contains("ID: 0123456789abcdef"));
        assert!(!markup.contains("data-id"));
        assert!(markup.contains("$9.01"));
    }

    #[test]
    fn short_ids_keep_the_first_eight_characters() {
        assert_eq!(short_id("0123456789"), "01234567...");
        assert_eq!(short_id("abc"), "abc...");
    }

    #[test]
    fn notices_escape_their_text() {
        let markup = notice("error", "Error: <boom>");
        assert!(markup.contains("message error"));
        assert!(markup.contains("Error: &lt;boom&gt;"));
    }
}
