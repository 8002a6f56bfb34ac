use std::path::PathBuf;

/// Default site directory
pub fn default_site_dir() -> PathBuf {
    PathBuf::from("./_site")
}

/// Default marker class excluding a heading from links and the TOC
pub fn default_ignore_class() -> String {
    "ignore-link".to_string()
}

pub fn default_toc_container_id() -> String {
    "toc".to_string()
}

pub fn default_toc_levels() -> String {
    "h2,h3".to_string()
}

pub fn default_toc_title() -> String {
    "Table of Contents".to_string()
}

pub fn default_anchor_min_level() -> usize {
    2
}

pub fn default_anchor_max_level() -> usize {
    4
}

pub fn default_link_class() -> String {
    "heading-link".to_string()
}

pub fn default_true() -> bool {
    true
}
