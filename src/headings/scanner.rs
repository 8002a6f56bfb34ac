use lazy_static::lazy_static;
use regex::Regex;

use crate::headings::types::Heading;
use crate::html::{attr_value, has_class, is_visible};

lazy_static! {
    // The closing tag is matched by level class rather than a back-reference;
    // generated pages do not nest heading elements.
    static ref HEADING_REGEX: Regex =
        Regex::new(r"(?is)<h([1-6])([^>]*)>(.*?)</h[1-6]\s*>").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Scan a page for heading elements and lift them into descriptors.
///
/// Headings are returned in document order. The scan reads the current text
/// fresh each time it is called; passes that mutate the page re-scan rather
/// than reusing stale spans.
pub fn scan_headings(html: &str, ignore_class: &str) -> Vec<Heading> {
    let mut headings = Vec::new();

    for cap in HEADING_REGEX.captures_iter(html) {
        let whole = cap.get(0).unwrap();
        let attrs = cap.get(2).unwrap();
        let body = cap.get(3).unwrap();

        // The tag character class guarantees a parseable single digit.
        let level: usize = cap[1].parse().unwrap_or(0);

        let id = attr_value(attrs.as_str(), "id").unwrap_or_default();
        let ignored = attr_value(attrs.as_str(), "class")
            .map(|class| has_class(&class, ignore_class))
            .unwrap_or(false);

        headings.push(Heading {
            level,
            id,
            text: extract_text(body.as_str()),
            visible: is_visible(attrs.as_str()),
            ignored,
            span: whole.start()..whole.end(),
            open_end: attrs.end() + 1,
            body_end: body.end(),
        });
    }

    headings
}

/// Strip inner markup and decode entities to recover the display text
fn extract_text(body: &str) -> String {
    let stripped = TAG_REGEX.replace_all(body, "");
    let decoded = html_escape::decode_html_entities(stripped.as_ref());

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const IGNORE: &str = "ignore-link";

    #[test]
    fn test_scan_basic_headings() {
        let html = r##"
            <h2 id="intro">Introduction</h2>
            <p>Some text</p>
            <h3 id="details">Details</h3>
        "##;

        let headings = scan_headings(html, IGNORE);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].id, "intro");
        assert_eq!(headings[0].text, "Introduction");
        assert!(headings[0].visible);
        assert!(!headings[0].ignored);
        assert_eq!(headings[1].level, 3);
    }

    #[test]
    fn test_scan_missing_id() {
        let headings = scan_headings("<h2>No anchor here</h2>", IGNORE);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].id, "");
    }

    #[test]
    fn test_scan_markers() {
        let html = r##"
            <h2 id="a" class="ignore-link">Skipped</h2>
            <h2 id="b" style="display:none">Offscreen</h2>
            <h2 id="c" hidden>Also offscreen</h2>
        "##;

        let headings = scan_headings(html, IGNORE);
        assert!(headings[0].ignored);
        assert!(headings[0].visible);
        assert!(!headings[1].visible);
        assert!(!headings[2].visible);
    }

    #[test]
    fn test_scan_text_recovery() {
        let html = "<h2 id=\"x\">The <code>foo</code> &amp; <em>bar</em>\n  options</h2>";

        let headings = scan_headings(html, IGNORE);
        assert_eq!(headings[0].text, "The foo & bar options");
    }

    #[test]
    fn test_scan_spans() {
        let html = "<h2 id=\"x\">Title</h2>";
        let headings = scan_headings(html, IGNORE);

        let h = &headings[0];
        assert_eq!(&html[h.span.clone()], html);
        assert_eq!(&html[h.open_end..h.body_end], "Title");
    }

    #[test]
    fn test_scan_document_order() {
        let html = "<h3 id=\"b\">B</h3><h2 id=\"a\">A</h2>";
        let headings = scan_headings(html, IGNORE);

        assert_eq!(headings[0].id, "b");
        assert_eq!(headings[1].id, "a");
    }
}
