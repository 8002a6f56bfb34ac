use lazy_static::lazy_static;
use regex::Regex;

use crate::html::classes::has_class;

lazy_static! {
    static ref ATTR_REGEX: Regex = Regex::new(
        r#"([a-zA-Z][a-zA-Z0-9_:-]*)\s*(?:=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#
    )
    .unwrap();
}

/// Extract the value of a named attribute from a raw attribute string.
///
/// Returns None when the attribute is absent; a bare attribute (no value)
/// yields an empty string.
pub fn attr_value(attrs: &str, name: &str) -> Option<String> {
    for cap in ATTR_REGEX.captures_iter(attrs) {
        if !cap[1].eq_ignore_ascii_case(name) {
            continue;
        }

        let value = cap
            .get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        return Some(value);
    }

    None
}

/// Check whether an element is rendered, judging from its attribute string.
///
/// An element is considered hidden when it carries the `hidden` attribute,
/// an inline `display:none`/`visibility:hidden` style, or the `hidden` class.
pub fn is_visible(attrs: &str) -> bool {
    if attr_value(attrs, "hidden").is_some() {
        return false;
    }

    if let Some(style) = attr_value(attrs, "style") {
        let style: String = style
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if style.contains("display:none") || style.contains("visibility:hidden") {
            return false;
        }
    }

    if let Some(class) = attr_value(attrs, "class") {
        if has_class(&class, "hidden") {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_quoting() {
        assert_eq!(attr_value(r#" id="intro" "#, "id").as_deref(), Some("intro"));
        assert_eq!(attr_value(r#" id='intro' "#, "id").as_deref(), Some("intro"));
        assert_eq!(attr_value(r#" id=intro "#, "id").as_deref(), Some("intro"));
        assert_eq!(attr_value(r#" class="a b" id="x" "#, "class").as_deref(), Some("a b"));
        assert_eq!(attr_value(r#" class="a" "#, "id"), None);
    }

    #[test]
    fn test_bare_attribute() {
        assert_eq!(attr_value(" hidden ", "hidden").as_deref(), Some(""));
    }

    #[test]
    fn test_case_insensitive_names() {
        assert_eq!(attr_value(r#" ID="x" "#, "id").as_deref(), Some("x"));
    }

    #[test]
    fn test_visibility() {
        assert!(is_visible(r#" id="a" class="section" "#));
        assert!(!is_visible(" hidden "));
        assert!(!is_visible(r#" style="display: none" "#));
        assert!(!is_visible(r#" style="DISPLAY:NONE;" "#));
        assert!(!is_visible(r#" style="visibility: hidden" "#));
        assert!(!is_visible(r#" class="hidden" "#));
        assert!(is_visible(r#" class="hidden-xs" "#));
    }
}
