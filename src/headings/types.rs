use std::ops::Range;

/// A heading element lifted out of a page into a typed descriptor.
///
/// All later passes (linkification, TOC building) work on these descriptors
/// instead of probing the markup again; the byte spans tie a descriptor back
/// to its place in the source text for in-place edits.
#[derive(Debug, Clone)]
pub struct Heading {
    /// Heading depth derived from the tag (h2 = 2). Builders treat 0 or
    /// out-of-range levels as skippable.
    pub level: usize,
    /// Anchor identifier; empty when the element carries no id attribute.
    pub id: String,
    /// Display text with inner markup stripped and entities decoded.
    pub text: String,
    /// Whether the element renders on screen (hidden attribute, inline
    /// display/visibility style and the `hidden` class all count as hidden).
    pub visible: bool,
    /// Whether the element carries the configured ignore marker class.
    pub ignored: bool,
    /// Byte range of the whole element in the source HTML.
    pub span: Range<usize>,
    /// Byte offset just past the opening tag's `>`.
    pub open_end: usize,
    /// Byte offset of the start of the closing tag, where an anchor link
    /// can be appended inside the element.
    pub body_end: usize,
}

/// Options for the heading linkifier
#[derive(Debug, Clone)]
pub struct LinkifyOptions {
    /// Shallowest heading level to decorate
    pub min_level: usize,
    /// Deepest heading level to decorate
    pub max_level: usize,
    /// CSS class placed on injected anchor links
    pub link_class: String,
    /// Marker class excluding a heading from decoration
    pub ignore_class: String,
}

impl Default for LinkifyOptions {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 4,
            link_class: "heading-link".to_string(),
            ignore_class: "ignore-link".to_string(),
        }
    }
}
