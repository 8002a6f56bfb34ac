mod anchors;

use std::path::Path;

use serde::Serialize;

/// Options for the site check
pub struct CheckOptions {
    pub verbose: bool,
}

/// Result of a full site check
#[derive(Debug, Serialize)]
pub struct SiteCheckReport {
    /// When the check ran (RFC 3339)
    pub checked_at: String,
    /// Number of HTML pages examined
    pub pages: usize,
    pub broken_anchors: Vec<String>,
    pub duplicate_ids: Vec<String>,
}

impl SiteCheckReport {
    pub fn is_clean(&self) -> bool {
        self.broken_anchors.is_empty() && self.duplicate_ids.is_empty()
    }
}

/// Run every site check and collect the findings
pub async fn run_check(site_dir: &Path, options: CheckOptions) -> Result<SiteCheckReport, String> {
    let pages = anchors::count_pages(site_dir)?;

    let broken_anchors = anchors::check_anchors(site_dir, options.verbose).await?;
    let duplicate_ids = anchors::check_duplicate_ids(site_dir, options.verbose).await?;

    Ok(SiteCheckReport {
        checked_at: chrono::Local::now().to_rfc3339(),
        pages,
        broken_anchors,
        duplicate_ids,
    })
}

/// Render the report for the console
pub fn render_console_report(report: &SiteCheckReport) -> String {
    let mut output = String::from("Docsmith Site Check\n===================\n\n");

    output.push_str(&format!("Checked {} pages at {}\n\n", report.pages, report.checked_at));

    output.push_str("Broken fragment links:\n");
    if report.broken_anchors.is_empty() {
        output.push_str("  No broken fragment links found!\n");
    } else {
        for issue in &report.broken_anchors {
            output.push_str(&format!("  - {}\n", issue));
        }
    }
    output.push('\n');

    output.push_str("Duplicate ids:\n");
    if report.duplicate_ids.is_empty() {
        output.push_str("  No duplicate ids found!\n");
    } else {
        for issue in &report.duplicate_ids {
            output.push_str(&format!("  - {}\n", issue));
        }
    }

    output
}

/// Render the report as JSON
pub fn render_json_report(report: &SiteCheckReport) -> Result<String, String> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Failed to serialize report: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_run_check_clean_site() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path().join("index.html"),
            "<h2 id=\"a\">A</h2><a href=\"#a\">jump</a>",
        )
        .unwrap();

        let report = run_check(dir.path(), CheckOptions { verbose: false })
            .await
            .unwrap();

        assert_eq!(report.pages, 1);
        assert!(report.is_clean());

        let console = render_console_report(&report);
        assert!(console.contains("No broken fragment links found!"));
    }

    #[tokio::test]
    async fn test_run_check_reports_findings() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path().join("index.html"),
            "<div id=\"x\"></div><div id=\"x\"></div><a href=\"#gone\">x</a>",
        )
        .unwrap();

        let report = run_check(dir.path(), CheckOptions { verbose: false })
            .await
            .unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.broken_anchors.len(), 1);
        assert_eq!(report.duplicate_ids.len(), 1);

        let json = render_json_report(&report).unwrap();
        assert!(json.contains("broken_anchors"));
    }

    #[tokio::test]
    async fn test_run_check_missing_dir() {
        let result = run_check(Path::new("not/a/dir"), CheckOptions { verbose: false }).await;
        assert!(result.is_err());
    }
}
