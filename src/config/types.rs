use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::headings::LinkifyOptions;
use crate::toc::TocOptions;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the built site to post-process
    #[serde(default = "defaults::default_site_dir")]
    pub site_dir: PathBuf,

    /// Optional output directory; when set, the site is copied there and
    /// enhanced out of place instead of being mutated under site_dir
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Glob patterns of site-relative paths excluded from enhancement
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Marker class excluding a heading from links and the TOC
    #[serde(default = "defaults::default_ignore_class")]
    pub ignore_class: String,

    /// Table of contents settings
    #[serde(default)]
    pub toc: TocSettings,

    /// Heading anchor link settings
    #[serde(default)]
    pub anchors: AnchorSettings,

    /// Page furniture settings
    #[serde(default)]
    pub snippets: SnippetSettings,

    /// Moved pages: old site-relative path to new URL
    #[serde(default)]
    pub redirects: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_dir: defaults::default_site_dir(),
            destination: None,
            exclude: Vec::new(),
            ignore_class: defaults::default_ignore_class(),
            toc: TocSettings::default(),
            anchors: AnchorSettings::default(),
            snippets: SnippetSettings::default(),
            redirects: BTreeMap::new(),
        }
    }
}

impl Config {
    /// The directory enhanced pages are written to
    pub fn output_dir(&self) -> &Path {
        self.destination.as_deref().unwrap_or(&self.site_dir)
    }

    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            container_id: self.toc.container_id.clone(),
            levels: self.toc.levels.clone(),
            title: self.toc.title.clone(),
            ignore_class: self.ignore_class.clone(),
        }
    }

    pub fn linkify_options(&self) -> LinkifyOptions {
        LinkifyOptions {
            min_level: self.anchors.min_level,
            max_level: self.anchors.max_level,
            link_class: self.anchors.link_class.clone(),
            ignore_class: self.ignore_class.clone(),
        }
    }
}

/// Table of contents settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocSettings {
    #[serde(default = "defaults::default_true")]
    pub enabled: bool,

    /// Element id of the container the TOC is rendered into
    #[serde(default = "defaults::default_toc_container_id")]
    pub container_id: String,

    /// Comma-separated heading tag list, e.g. "h2,h3"
    #[serde(default = "defaults::default_toc_levels")]
    pub levels: String,

    /// Title block text
    #[serde(default = "defaults::default_toc_title")]
    pub title: String,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            container_id: defaults::default_toc_container_id(),
            levels: defaults::default_toc_levels(),
            title: defaults::default_toc_title(),
        }
    }
}

/// Heading anchor link settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorSettings {
    #[serde(default = "defaults::default_true")]
    pub enabled: bool,

    /// Shallowest heading level to decorate
    #[serde(default = "defaults::default_anchor_min_level")]
    pub min_level: usize,

    /// Deepest heading level to decorate
    #[serde(default = "defaults::default_anchor_max_level")]
    pub max_level: usize,

    /// CSS class placed on injected anchor links
    #[serde(default = "defaults::default_link_class")]
    pub link_class: String,

    /// Slugify ids for headings that lack one
    #[serde(default)]
    pub assign_ids: bool,
}

impl Default for AnchorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_level: defaults::default_anchor_min_level(),
            max_level: defaults::default_anchor_max_level(),
            link_class: defaults::default_link_class(),
            assign_ids: false,
        }
    }
}

/// Page furniture settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetSettings {
    /// Inject a back-to-top link block
    #[serde(default = "defaults::default_true")]
    pub back_to_top: bool,

    /// Inject copy buttons before code blocks
    #[serde(default = "defaults::default_true")]
    pub copy_buttons: bool,
}

impl Default for SnippetSettings {
    fn default() -> Self {
        Self {
            back_to_top: true,
            copy_buttons: true,
        }
    }
}
