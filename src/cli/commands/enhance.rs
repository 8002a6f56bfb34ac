use log::{error, info, LevelFilter};
use std::path::PathBuf;

use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;
use crate::config;
use crate::enhance;

/// Handle the enhance command
pub async fn handle_enhance_command(
    command: &Commands,
    source: Option<&PathBuf>,
    destination: Option<&PathBuf>,
) {
    if let Commands::Enhance {
        config: cfg_files,
        dry_run,
        quiet,
        verbose,
        source: enhance_source,
        destination: enhance_destination,
        debug,
    } = command
    {
        if *verbose || *debug {
            set_log_level(LevelFilter::Debug);
        } else if *quiet {
            set_log_level(LevelFilter::Error);
        }

        let config_paths = cfg_files
            .as_ref()
            .map(|files| files.iter().map(PathBuf::from).collect());

        let mut config = match config::load_config(PathBuf::from("."), config_paths) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        // Command-specific options take precedence over global options.
        if let Some(dir) = enhance_source.as_ref().or(source) {
            config.site_dir = dir.clone();
        }
        if let Some(dir) = enhance_destination.as_ref().or(destination) {
            config.destination = Some(dir.clone());
        }

        if *dry_run {
            info!("Dry run: no files will be written");
        }

        match enhance::enhance_site(&config, *dry_run) {
            Ok(stats) => {
                info!(
                    "Enhanced {} pages ({} anchor links, {} ids assigned, {} tables of contents, {} copy buttons)",
                    stats.pages,
                    stats.links_added,
                    stats.ids_assigned,
                    stats.tocs_inserted,
                    stats.copy_buttons
                );
                if stats.failed_pages > 0 {
                    error!("{} pages failed, see errors above", stats.failed_pages);
                }
            }
            Err(e) => error!("Failed to enhance site: {}", e),
        }
    }
}
