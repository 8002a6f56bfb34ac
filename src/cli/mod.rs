pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use crate::config;
use std::path::PathBuf;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(types::Commands::Enhance { .. }) => {
            commands::handle_enhance_command(
                cli.command.as_ref().unwrap(),
                cli.source.as_ref(),
                cli.destination.as_ref(),
            )
            .await;
        }
        Some(types::Commands::Redirects { .. }) => {
            commands::handle_redirects_command(cli.command.as_ref().unwrap(), cli.source.as_ref())
                .await;
        }
        Some(types::Commands::Check { .. }) => {
            commands::handle_check_command(cli.command.as_ref().unwrap(), cli.source.as_ref())
                .await;
        }
        None => {
            // Default to the enhance command if none provided
            let mut config = match config::load_config(PathBuf::from("."), None) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::error!("Failed to load config: {}", e);
                    return;
                }
            };

            if let Some(source) = cli.source.as_ref() {
                config.site_dir = source.clone();
            }
            if let Some(destination) = cli.destination.as_ref() {
                config.destination = Some(destination.clone());
            }

            log::info!("Enhancing site...");
            match crate::enhance::enhance_site(&config, false) {
                Ok(stats) => log::info!(
                    "Enhanced {} pages at {}",
                    stats.pages,
                    config.output_dir().display()
                ),
                Err(e) => log::error!("Failed to enhance site: {}", e),
            }
        }
    }
}
