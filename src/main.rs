//! Instagram Graph CLI
//!
//! Sends one authorized request and prints the response body

use anyhow::Context;
use clap::Parser;
use instagram_graph::cli::{log_filter, Cli, Runner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the response body
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(cli.verbose)?)
        .init();

    let runner = Runner::new(cli);
    runner.run().await.context("Graph API request failed")
}
