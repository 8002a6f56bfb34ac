use log::{error, info};
use std::path::PathBuf;

use crate::cli::types::Commands;
use crate::report::{self, CheckOptions};
use crate::utils::fs::write_file;

/// Handle the check command
pub async fn handle_check_command(command: &Commands, source_dir: Option<&PathBuf>) {
    if let Commands::Check {
        source,
        verbose,
        json,
        output,
    } = command
    {
        let site_dir = source
            .as_ref()
            .or(source_dir)
            .cloned()
            .unwrap_or_else(|| PathBuf::from("./_site"));

        if !site_dir.exists() {
            error!("Site directory does not exist: {}", site_dir.display());
            error!("Make sure to build your site before checking it.");
            return;
        }

        let options = CheckOptions { verbose: *verbose };

        let check_report = match report::run_check(&site_dir, options).await {
            Ok(check_report) => check_report,
            Err(e) => {
                error!("Failed to check site: {}", e);
                return;
            }
        };

        let rendered = if *json {
            match report::render_json_report(&check_report) {
                Ok(rendered) => rendered,
                Err(e) => {
                    error!("{}", e);
                    return;
                }
            }
        } else {
            report::render_console_report(&check_report)
        };

        match output {
            Some(path) => match write_file(path, &rendered) {
                Ok(_) => info!("Report written to {}", path.display()),
                Err(e) => error!("Failed to write report to {}: {}", path.display(), e),
            },
            None => println!("{}", rendered),
        }

        if !check_report.is_clean() {
            info!(
                "Found {} broken fragment links and {} duplicate ids",
                check_report.broken_anchors.len(),
                check_report.duplicate_ids.len()
            );
        }
    }
}
