pub mod horizontal;
pub mod vertical;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::headings::scan_headings;
use crate::html::{attr_value, has_class};
use crate::utils::error::{BoxResult, DocsmithError};

lazy_static! {
    static ref LEVEL_SPEC_REGEX: Regex = Regex::new(r"^h?([1-6])$").unwrap();
}

/// Rendering orientation for a generated table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocStyle {
    Horizontal,
    Vertical,
}

impl TocStyle {
    /// Determine the orientation from a container's class list.
    ///
    /// Anything other than an explicit `horizontal` token falls back to
    /// vertical.
    pub fn from_class_attr(class_attr: &str) -> Self {
        if has_class(class_attr, "horizontal") {
            TocStyle::Horizontal
        } else {
            TocStyle::Vertical
        }
    }
}

/// Options for TOC generation
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Element id of the container the TOC is rendered into
    pub container_id: String,
    /// Comma-separated heading tag list, e.g. "h2,h3"
    pub levels: String,
    /// Text of the title block inserted before the table
    pub title: String,
    /// Marker class excluding a heading from the TOC
    pub ignore_class: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            container_id: "toc".to_string(),
            levels: "h2,h3".to_string(),
            title: "Table of Contents".to_string(),
            ignore_class: "ignore-link".to_string(),
        }
    }
}

/// Parse a heading tag list ("h2,h3") into sorted, de-duplicated levels.
/// Unparseable entries are dropped.
pub fn parse_levels(spec: &str) -> Vec<usize> {
    let mut levels: Vec<usize> = Vec::new();

    for part in spec.split(',') {
        let part = part.trim().to_ascii_lowercase();
        if let Some(cap) = LEVEL_SPEC_REGEX.captures(&part) {
            // The character class guarantees a single digit in range.
            let level: usize = cap[1].parse().unwrap_or(0);
            if level > 0 && !levels.contains(&level) {
                levels.push(level);
            }
        }
    }

    levels.sort_unstable();
    levels
}

/// Generate a table of contents and insert it into the page's container.
///
/// Returns Ok(None) when the page has no container element with the
/// configured id; the page load must not be disturbed by a missing
/// container, so this is a silent skip rather than an error.
pub fn insert_toc(html: &str, options: &TocOptions) -> BoxResult<Option<String>> {
    let container = match find_container(html, &options.container_id) {
        Some(container) => container,
        None => {
            debug!(
                "No TOC container with id \"{}\" on this page, skipping",
                options.container_id
            );
            return Ok(None);
        }
    };

    let levels = parse_levels(&options.levels);
    if levels.is_empty() {
        return Err(DocsmithError::Config(format!(
            "No valid heading levels in \"{}\"",
            options.levels
        ))
        .into());
    }
    let master = levels[0];
    let lowest = *levels.last().unwrap();

    let headings = scan_headings(html, &options.ignore_class);

    let table = match TocStyle::from_class_attr(&container.class_attr) {
        TocStyle::Horizontal => horizontal::build(&headings, master, lowest),
        TocStyle::Vertical => vertical::build(&headings, master, lowest),
    };

    let block = format!(
        "\n<div class=\"toc-title\">{}</div>\n{}\n",
        html_escape::encode_text(&options.title),
        table
    );

    let mut out = String::with_capacity(html.len() + block.len());
    out.push_str(&html[..container.insert_at]);
    out.push_str(&block);
    out.push_str(&html[container.insert_at..]);

    Ok(Some(out))
}

/// Render a single TOC entry link
pub(crate) fn entry(id: &str, text: &str) -> String {
    format!(
        "<a href=\"#{}\">{}</a>",
        id,
        html_escape::encode_text(text)
    )
}

struct Container {
    /// Byte offset just past the opening tag, where content is inserted
    insert_at: usize,
    class_attr: String,
}

fn find_container(html: &str, id: &str) -> Option<Container> {
    let pattern = format!(
        r#"(?is)<[a-z][a-z0-9]*\b([^>]*\bid\s*=\s*["']{}["'][^>]*)>"#,
        regex::escape(id)
    );
    // The id is escaped, so the assembled pattern is always valid.
    let container_regex = Regex::new(&pattern).ok()?;

    let cap = container_regex.captures(html)?;
    let whole = cap.get(0).unwrap();
    let class_attr = attr_value(cap.get(1).unwrap().as_str(), "class").unwrap_or_default();

    Some(Container {
        insert_at: whole.end(),
        class_attr,
    })
}
