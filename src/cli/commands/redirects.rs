use log::{error, info, LevelFilter};
use std::path::PathBuf;

use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;
use crate::config;
use crate::redirects;

/// Handle the redirects command
pub async fn handle_redirects_command(command: &Commands, source: Option<&PathBuf>) {
    if let Commands::Redirects {
        config: cfg_files,
        source: redirects_source,
        verbose,
    } = command
    {
        if *verbose {
            set_log_level(LevelFilter::Debug);
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

        if let Some(dir) = redirects_source.as_ref().or(source) {
            config.site_dir = dir.clone();
        }

        if config.redirects.is_empty() {
            info!("No redirects configured, nothing to do");
            return;
        }

        match redirects::generate_redirects(&config) {
            Ok(written) => info!("Generated {} redirect stubs", written),
            Err(e) => error!("Failed to generate redirects: {}", e),
        }
    }
}
