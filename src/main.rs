// Module declarations
mod cli;
mod config;
mod enhance;
mod headings;
mod html;
mod redirects;
mod report;
mod toc;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
