use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Post-processor for generated documentation sites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site directory to process (defaults to ./_site)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output directory (defaults to enhancing in place)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Enhance the built site: heading anchors, tables of contents, page furniture
    #[command(alias = "e")]
    Enhance {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<String>>,

        /// Report what would change without writing anything
        #[arg(short = 'n', long, default_value_t = false)]
        dry_run: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,

        /// Site directory to process
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Enable debug logging
        #[arg(short = 'g', long, default_value_t = false)]
        debug: bool,
    },

    /// Generate redirect stub pages for moved URLs
    #[command(alias = "r")]
    Redirects {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<String>>,

        /// Site directory to write stubs into
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Check fragment links and id uniqueness across the site
    #[command(alias = "c")]
    Check {
        /// Site directory to check
        #[arg(short = 's', long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Print verbose output with per-page progress
        #[arg(short = 'v', long, default_value_t = false)]
        verbose: bool,

        /// Print the report as JSON
        #[arg(short = 'j', long, default_value_t = false)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
