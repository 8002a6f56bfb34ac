/// Whole-token class membership test.
///
/// Pads both the normalized class list and the queried name with boundary
/// spaces before the substring search, so a query can never match a prefix
/// or suffix of a longer class name.
pub fn has_class(class_attr: &str, name: &str) -> bool {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return false;
    }

    let mut haystack = String::with_capacity(class_attr.len() + 2);
    haystack.push(' ');
    for token in class_attr.split_whitespace() {
        haystack.push_str(token);
        haystack.push(' ');
    }

    let needle = format!(" {} ", name);
    haystack.contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_token_match() {
        assert!(has_class("toc title", "toc"));
        assert!(has_class("toc", "toc"));
        assert!(has_class("a toc b", "toc"));
    }

    #[test]
    fn test_no_substring_match() {
        assert!(!has_class("toc_title", "toc"));
        assert!(!has_class("mytoc", "toc"));
        assert!(!has_class("tocx", "toc"));
    }

    #[test]
    fn test_whitespace_variants() {
        assert!(has_class("  toc\ttitle\n", "toc"));
        assert!(has_class("title\ttoc", "toc"));
    }

    #[test]
    fn test_degenerate_queries() {
        assert!(!has_class("toc", ""));
        assert!(!has_class("", "toc"));
        assert!(!has_class("toc title", "toc title"));
    }
}
