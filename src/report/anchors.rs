use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::fs::{list_files_with_ext, read_file};
use crate::utils::path::make_relative;

lazy_static! {
    static ref ID_REGEX: Regex = Regex::new(r#"\bid\s*=\s*["']([^"']+)["']"#).unwrap();
    static ref HREF_REGEX: Regex = Regex::new(r#"\bhref\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// Check that every fragment link on the site resolves to an element id.
///
/// Covers same-page links (`#section`) and cross-page links
/// (`page.html#section`, absolute or relative to the linking page).
/// External schemes are skipped.
pub async fn check_anchors(site_dir: &Path, verbose: bool) -> Result<Vec<String>, String> {
    if verbose {
        log::info!("Checking fragment links in {}...", site_dir.display());
    }

    let pages = html_pages(site_dir)?;
    let mut ids_by_page: HashMap<PathBuf, HashSet<String>> = HashMap::new();

    for page in &pages {
        let content = read_file(page)
            .map_err(|e| format!("Failed to read {}: {}", page.display(), e))?;
        ids_by_page.insert(page.clone(), collect_ids(&content));
    }

    let mut issues = Vec::new();

    for page in &pages {
        let content = read_file(page)
            .map_err(|e| format!("Failed to read {}: {}", page.display(), e))?;
        let display = make_relative(page, site_dir);

        for cap in HREF_REGEX.captures_iter(&content) {
            let href = &cap[1];

            if is_external(href) || !href.contains('#') {
                continue;
            }

            let (path_part, fragment) = href.split_once('#').unwrap();
            let fragment = decode(fragment);
            if fragment.is_empty() {
                // A bare "#" is a conventional no-op target.
                continue;
            }

            let target_page = if path_part.is_empty() {
                page.clone()
            } else {
                resolve_target(site_dir, page, &decode(path_part))
            };

            match ids_by_page.get(&target_page) {
                Some(ids) if ids.contains(&fragment) => {}
                Some(_) => issues.push(format!(
                    "Broken fragment in {}: {} (no id \"{}\" in target)",
                    display.display(),
                    href,
                    fragment
                )),
                None => issues.push(format!(
                    "Broken fragment in {}: {} (target page not found)",
                    display.display(),
                    href
                )),
            }
        }
    }

    if verbose {
        log::info!("Fragment check completed, found {} issues", issues.len());
    }

    Ok(issues)
}

/// Report element ids declared more than once within a document.
///
/// Anchor targets must be unique per page; a duplicated id makes the
/// browser's fragment navigation ambiguous.
pub async fn check_duplicate_ids(site_dir: &Path, verbose: bool) -> Result<Vec<String>, String> {
    if verbose {
        log::info!("Checking id uniqueness in {}...", site_dir.display());
    }

    let mut issues = Vec::new();

    for page in html_pages(site_dir)? {
        let content = read_file(&page)
            .map_err(|e| format!("Failed to read {}: {}", page.display(), e))?;

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for cap in ID_REGEX.captures_iter(&content) {
            let id = cap[1].to_string();
            if !seen.insert(id.clone()) && reported.insert(id.clone()) {
                issues.push(format!(
                    "Duplicate id \"{}\" in {}",
                    id,
                    make_relative(&page, site_dir).display()
                ));
            }
        }
    }

    if verbose {
        log::info!("Id uniqueness check completed, found {} issues", issues.len());
    }

    Ok(issues)
}

/// Count the HTML pages under the site directory
pub fn count_pages(site_dir: &Path) -> Result<usize, String> {
    Ok(html_pages(site_dir)?.len())
}

fn html_pages(site_dir: &Path) -> Result<Vec<PathBuf>, String> {
    if !site_dir.is_dir() {
        return Err(format!("Directory does not exist: {}", site_dir.display()));
    }

    list_files_with_ext(site_dir, "html")
        .map_err(|e| format!("Failed to walk {}: {}", site_dir.display(), e))
}

fn collect_ids(content: &str) -> HashSet<String> {
    ID_REGEX
        .captures_iter(content)
        .map(|cap| cap[1].to_string())
        .collect()
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
}

/// Decode percent escapes; filenames on disk are stored unencoded
fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Resolve an href path against the linking page (or the site root for
/// absolute paths)
fn resolve_target(site_dir: &Path, page: &Path, path_part: &str) -> PathBuf {
    let (base, relative) = if let Some(rooted) = path_part.strip_prefix('/') {
        (site_dir.to_path_buf(), rooted)
    } else {
        (
            page.parent().map(|p| p.to_path_buf()).unwrap_or_default(),
            path_part,
        )
    };

    let mut result = base;
    for part in relative.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                result.pop();
            }
            other => result.push(other),
        }
    }

    if result.extension().is_none() {
        result.push("index.html");
    }

    result
}
