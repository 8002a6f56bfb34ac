use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::headings::scanner::scan_headings;
use crate::headings::types::LinkifyOptions;

lazy_static! {
    static ref ID_REGEX: Regex = Regex::new(r#"\bid\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// Append a same-page anchor link inside every eligible heading.
///
/// A heading is eligible when its level lies within the configured range, it
/// is not ignore-marked and it has a non-empty id. Headings without an id are
/// silently skipped. The operation appends unconditionally: invoking it twice
/// on the same page produces two links per heading, so the pipeline calls it
/// exactly once per page per run.
///
/// Returns the rewritten page and the number of links added.
pub fn linkify_headings(html: &str, options: &LinkifyOptions) -> (String, usize) {
    let headings = scan_headings(html, &options.ignore_class);

    let mut out = String::with_capacity(html.len() + headings.len() * 64);
    let mut last = 0;
    let mut added = 0;

    for heading in &headings {
        if heading.level < options.min_level || heading.level > options.max_level {
            continue;
        }
        if heading.ignored || heading.id.is_empty() {
            continue;
        }

        // The anchor body stays empty: the stylesheet supplies the link
        // icon, and a later TOC scan must recover the original heading
        // text unchanged.
        out.push_str(&html[last..heading.body_end]);
        out.push_str(&format!(
            "<a class=\"{}\" href=\"#{}\"></a>",
            options.link_class, heading.id
        ));
        last = heading.body_end;
        added += 1;
    }

    out.push_str(&html[last..]);
    (out, added)
}

/// Assign generated ids to headings that lack one.
///
/// Ids are slugified from the heading text and de-duplicated with a numeric
/// suffix against every id already present in the document. Headings whose
/// text slugifies to nothing are left alone.
///
/// Returns the rewritten page and the number of ids assigned.
pub fn assign_heading_ids(
    html: &str,
    options: &LinkifyOptions,
) -> (String, usize) {
    let headings = scan_headings(html, &options.ignore_class);

    let mut used: HashSet<String> = ID_REGEX
        .captures_iter(html)
        .map(|cap| cap[1].to_string())
        .collect();

    let mut out = String::with_capacity(html.len() + 64);
    let mut last = 0;
    let mut assigned = 0;

    for heading in &headings {
        if heading.level < options.min_level || heading.level > options.max_level {
            continue;
        }
        if heading.ignored || !heading.id.is_empty() {
            continue;
        }

        let base = slug::slugify(&heading.text);
        if base.is_empty() {
            continue;
        }

        let mut candidate = base.clone();
        let mut suffix = 2;
        while used.contains(&candidate) {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        used.insert(candidate.clone());

        // Splice the id attribute in just before the opening tag's `>`.
        let insert_at = heading.open_end - 1;
        out.push_str(&html[last..insert_at]);
        out.push_str(&format!(" id=\"{}\"", candidate));
        last = insert_at;
        assigned += 1;
    }

    out.push_str(&html[last..]);
    (out, assigned)
}
