use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::html::attr_value;

lazy_static! {
    static ref BODY_OPEN_REGEX: Regex = Regex::new(r"(?is)<body[^>]*>").unwrap();
    static ref BODY_CLOSE_REGEX: Regex = Regex::new(r"(?i)</body\s*>").unwrap();
    static ref PRE_OPEN_REGEX: Regex = Regex::new(r"(?is)<pre\b[^>]*>").unwrap();
    static ref ID_REGEX: Regex = Regex::new(r#"\bid\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// Inject the back-to-top pair: a `top` anchor right after the body open
/// tag and a link block just before the body close tag.
///
/// Pages without a body tag are returned untouched. The site stylesheet and
/// scripts own positioning and smooth-scroll behavior; only the markup they
/// hook onto is produced here.
pub fn inject_back_to_top(html: &str) -> (String, bool) {
    let open = match BODY_OPEN_REGEX.find(html) {
        Some(m) => m,
        None => return (html.to_string(), false),
    };

    let mut out = String::with_capacity(html.len() + 96);
    out.push_str(&html[..open.end()]);
    out.push_str("\n<a id=\"top\"></a>");

    match BODY_CLOSE_REGEX.find(html) {
        Some(close) if close.start() > open.end() => {
            out.push_str(&html[open.end()..close.start()]);
            out.push_str("<div class=\"back-to-top\"><a href=\"#top\">Back to top</a></div>\n");
            out.push_str(&html[close.start()..]);
        }
        _ => out.push_str(&html[open.end()..]),
    }

    (out, true)
}

/// Insert a copy button before every `<pre>` block.
///
/// The button references the block through `data-copy-target`; blocks
/// without an id get a generated `code-block-N` id, de-duplicated against
/// every id already present on the page.
///
/// Returns the rewritten page and the number of buttons inserted.
pub fn inject_copy_buttons(html: &str) -> (String, usize) {
    let mut used: HashSet<String> = ID_REGEX
        .captures_iter(html)
        .map(|cap| cap[1].to_string())
        .collect();

    let mut out = String::with_capacity(html.len() + 128);
    let mut last = 0;
    let mut count = 0;

    for open_tag in PRE_OPEN_REGEX.find_iter(html) {
        count += 1;
        out.push_str(&html[last..open_tag.start()]);

        // Attribute text sits between "<pre" and the closing ">".
        let attrs = &html[open_tag.start() + 4..open_tag.end() - 1];

        match attr_value(attrs, "id").filter(|id| !id.is_empty()) {
            Some(id) => {
                out.push_str(&copy_button(&id));
                out.push_str(&html[open_tag.start()..open_tag.end()]);
            }
            None => {
                let mut n = count;
                let mut id = format!("code-block-{}", n);
                while used.contains(&id) {
                    n += 1;
                    id = format!("code-block-{}", n);
                }
                used.insert(id.clone());

                out.push_str(&copy_button(&id));
                out.push_str(&html[open_tag.start()..open_tag.end() - 1]);
                out.push_str(&format!(" id=\"{}\">", id));
            }
        }

        last = open_tag.end();
    }

    out.push_str(&html[last..]);
    (out, count)
}

fn copy_button(target: &str) -> String {
    format!(
        "<button class=\"copy-button\" type=\"button\" data-copy-target=\"{}\">Copy</button>",
        target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_injection() {
        let html = "<html><body class=\"page\"><p>x</p></body></html>";
        let (out, applied) = inject_back_to_top(html);

        assert!(applied);
        assert!(out.contains("<body class=\"page\">\n<a id=\"top\"></a>"));
        assert!(out.contains("<div class=\"back-to-top\"><a href=\"#top\">Back to top</a></div>\n</body>"));
    }

    #[test]
    fn test_back_to_top_without_body() {
        let html = "<p>fragment only</p>";
        let (out, applied) = inject_back_to_top(html);

        assert!(!applied);
        assert_eq!(out, html);
    }

    #[test]
    fn test_copy_buttons_generated_ids() {
        let html = "<body><pre>a</pre><pre>b</pre></body>";
        let (out, count) = inject_copy_buttons(html);

        assert_eq!(count, 2);
        assert!(out.contains("data-copy-target=\"code-block-1\""));
        assert!(out.contains("<pre id=\"code-block-1\">a</pre>"));
        assert!(out.contains("<pre id=\"code-block-2\">b</pre>"));
    }

    #[test]
    fn test_copy_buttons_existing_id_kept() {
        let html = "<pre id=\"example\">a</pre>";
        let (out, count) = inject_copy_buttons(html);

        assert_eq!(count, 1);
        assert!(out.contains("data-copy-target=\"example\""));
        // The block is not rewritten when it already has an id.
        assert!(out.contains("<pre id=\"example\">a</pre>"));
    }

    #[test]
    fn test_copy_buttons_avoid_id_collisions() {
        let html = "<div id=\"code-block-1\"></div><pre>a</pre>";
        let (out, count) = inject_copy_buttons(html);

        assert_eq!(count, 1);
        assert!(out.contains("<pre id=\"code-block-2\">a</pre>"));
    }

    #[test]
    fn test_button_lands_before_block() {
        let html = "<pre>a</pre>";
        let (out, _) = inject_copy_buttons(html);

        let button = out.find("<button").unwrap();
        let block = out.find("<pre").unwrap();
        assert!(button < block);
    }
}
