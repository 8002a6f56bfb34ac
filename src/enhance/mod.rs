pub mod snippets;

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, error, info};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::Config;
use crate::headings::{assign_heading_ids, linkify_headings};
use crate::toc::insert_toc;
use crate::utils::error::{BoxResult, DocsmithError};
use crate::utils::fs::{create_directory, read_file, write_file};
use crate::utils::path::make_relative;

/// Outcome of enhancing a single page
pub struct PageOutcome {
    pub html: String,
    pub links_added: usize,
    pub ids_assigned: usize,
    pub toc_inserted: bool,
    pub copy_buttons: usize,
}

/// Aggregate counters for a site run
#[derive(Debug, Default)]
pub struct EnhanceStats {
    pub pages: usize,
    pub failed_pages: usize,
    pub links_added: usize,
    pub ids_assigned: usize,
    pub tocs_inserted: usize,
    pub copy_buttons: usize,
}

/// Run the enhancement pipeline over one page.
///
/// Stage order matters: ids are assigned before linkification so fresh ids
/// get anchors, and the TOC re-scans the page after linkification the same
/// way the browser variant re-walked the live document.
pub fn enhance_page(html: &str, config: &Config) -> BoxResult<PageOutcome> {
    let mut page = html.to_string();
    let mut links_added = 0;
    let mut ids_assigned = 0;

    if config.anchors.enabled {
        let options = config.linkify_options();

        if config.anchors.assign_ids {
            let (next, assigned) = assign_heading_ids(&page, &options);
            page = next;
            ids_assigned = assigned;
        }

        let (next, added) = linkify_headings(&page, &options);
        page = next;
        links_added = added;
    }

    let mut toc_inserted = false;
    if config.toc.enabled {
        if let Some(next) = insert_toc(&page, &config.toc_options())? {
            page = next;
            toc_inserted = true;
        }
    }

    let mut copy_buttons = 0;
    if config.snippets.copy_buttons {
        let (next, inserted) = snippets::inject_copy_buttons(&page);
        page = next;
        copy_buttons = inserted;
    }

    if config.snippets.back_to_top {
        let (next, _) = snippets::inject_back_to_top(&page);
        page = next;
    }

    Ok(PageOutcome {
        html: page,
        links_added,
        ids_assigned,
        toc_inserted,
        copy_buttons,
    })
}

/// Enhance every HTML page of the built site.
///
/// Pages are independent and processed in parallel; a page that fails is
/// logged and skipped without aborting the rest of the run. With a
/// destination configured the site is copied there first and enhanced out
/// of place; in dry-run mode nothing is copied or written.
pub fn enhance_site(config: &Config, dry_run: bool) -> BoxResult<EnhanceStats> {
    if !config.site_dir.is_dir() {
        return Err(DocsmithError::Config(format!(
            "Site directory does not exist: {}",
            config.site_dir.display()
        ))
        .into());
    }

    let work_dir: PathBuf = if dry_run {
        config.site_dir.clone()
    } else if let Some(destination) = &config.destination {
        copy_site(&config.site_dir, destination)?;
        destination.clone()
    } else {
        config.site_dir.clone()
    };

    let excludes = compile_excludes(&config.exclude)?;
    let pages = collect_pages(&work_dir, &excludes);
    info!("Enhancing {} pages in {}", pages.len(), work_dir.display());

    let outcomes: Vec<Result<PageOutcome, String>> = pages
        .par_iter()
        .map(|path| {
            let html = read_file(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

            let outcome = enhance_page(&html, config)
                .map_err(|e| format!("Failed to enhance {}: {}", path.display(), e))?;

            if !dry_run {
                write_file(path, &outcome.html)
                    .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            }

            Ok(outcome)
        })
        .collect();

    let mut stats = EnhanceStats::default();
    for outcome in outcomes {
        match outcome {
            Ok(page) => {
                stats.pages += 1;
                stats.links_added += page.links_added;
                stats.ids_assigned += page.ids_assigned;
                stats.copy_buttons += page.copy_buttons;
                if page.toc_inserted {
                    stats.tocs_inserted += 1;
                }
            }
            Err(message) => {
                stats.failed_pages += 1;
                error!("{}", message);
            }
        }
    }

    Ok(stats)
}

/// Copy the built site into the destination directory
fn copy_site(site_dir: &Path, destination: &Path) -> BoxResult<()> {
    create_directory(destination)?;

    let mut options = fs_extra::dir::CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    fs_extra::dir::copy(site_dir, destination, &options)?;

    debug!(
        "Copied site from {} to {}",
        site_dir.display(),
        destination.display()
    );
    Ok(())
}

fn compile_excludes(patterns: &[String]) -> BoxResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|e| {
                DocsmithError::Config(format!("Invalid exclude pattern \"{}\": {}", pattern, e))
                    .into()
            })
        })
        .collect()
}

/// Collect site-relative HTML pages, honoring exclude patterns
fn collect_pages(work_dir: &Path, excludes: &[Pattern]) -> Vec<PathBuf> {
    WalkDir::new(work_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| e.eq_ignore_ascii_case("html"))
        })
        .filter(|path| {
            let relative = make_relative(path, work_dir);
            !excludes
                .iter()
                .any(|pattern| pattern.matches_path(&relative))
        })
        .collect()
}
