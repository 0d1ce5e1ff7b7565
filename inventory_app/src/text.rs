/// Replaces the five reserved HTML characters with named entities.
/// Ampersand goes first so entities produced by the later replacements
/// are not escaped again.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Formats a price as dollars with exactly two decimals.
///
/// Rounding rule: half-up at the second decimal, applied after
/// snapping the float to six decimals, so a typed `9.005` reads
/// `$9.01` even though its binary value sits just below.
pub fn format_price(price: f64) -> String {
    let micros = (price * 1_000_000.0).round() as i64;
    let cents = (micros + 5_000) / 10_000;
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn count_label(count: usize) -> String {
    format!("{} item{}", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reverses escape_html, entities decoded in the opposite order.
    fn unescape_html(text: &str) -> String {
        text.replace("&#039;", "'")
            .replace("&quot;", "\"")
            .replace("&gt;", ">")
            .replace("&lt;", "<")
            .replace("&amp;", "&")
    }

    #[test]
    fn escapes_all_reserved_characters() {
        let escaped = escape_html(r#"<b>"Fish & Chips"</b> 'hot'"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert_eq!(
            escaped,
            "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt; &#039;hot&#039;"
        );
    }

    #[test]
    fn escaping_round_trips() {
        let original = r#"a&b<c>d"e'f & &amp; <script>"#;
        assert_eq!(unescape_html(&escape_html(original)), original);
    }

    #[test]
    fn ampersands_are_not_double_escaped() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escaped_output_has_no_stray_ampersands() {
        let escaped = escape_html("tom & jerry <>\"'");
        let mut rest = escaped.as_str();
        while let Some(at) = rest.find('&') {
            let tail = &rest[at..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]
                    .iter()
                    .any(|entity| tail.starts_with(entity)),
                "raw ampersand in {escaped}"
            );
            rest = &tail[1..];
        }
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(9.0), "$9.00");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(2.5), "$2.50");
        assert_eq!(format_price(1234.56), "$1234.56");
    }

    #[test]
    fn prices_round_half_up() {
        assert_eq!(format_price(9.005), "$9.01");
        assert_eq!(format_price(2.675), "$2.68");
        assert_eq!(format_price(19.999), "$20.00");
        assert_eq!(format_price(9.004), "$9.00");
    }

    #[test]
    fn count_label_picks_singular_and_plural() {
        assert_eq!(count_label(0), "0 items");
        assert_eq!(count_label(1), "1 item");
        assert_eq!(count_label(2), "2 items");
        assert_eq!(count_label(41), "41 items");
    }
}
