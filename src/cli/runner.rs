//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::error::{Error, Result};
use crate::http::{GraphApi, GraphApiConfig};
use std::io::Write;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Log filter for the binary: `RUST_LOG` first, INFO everywhere, and DEBUG
/// for this crate only when `verbose` is set
pub fn log_filter(verbose: bool) -> Result<EnvFilter> {
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into());
    if !verbose {
        return Ok(filter);
    }

    let directive: Directive = format!("{}=debug", env!("CARGO_CRATE_NAME"))
        .parse()
        .map_err(|e| Error::config(format!("Invalid log directive: {e}")))?;
    Ok(filter.add_directive(directive))
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and write the response body to stdout unchanged
    pub async fn run(&self) -> Result<()> {
        let body = self.execute().await?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(body.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Run the CLI command and return the response body
    pub async fn execute(&self) -> Result<String> {
        let token = self.token()?;
        let client = GraphApi::with_config(self.client_config()?)?;
        debug!(base_url = client.base_url(), "Using Graph API client");

        match &self.cli.command {
            Commands::Get { endpoint } => client.get(endpoint, token).await,
            Commands::Post { endpoint, body } => {
                client.post(endpoint, token, body.content()?).await
            }
            Commands::Put { endpoint, body } => {
                client.put(endpoint, token, body.content()?).await
            }
            Commands::Delete { endpoint } => client.delete(endpoint, token).await,
        }
    }

    /// Resolve the client config: `--base-url`, then `--config`, then the default
    fn client_config(&self) -> Result<GraphApiConfig> {
        let mut config = match &self.cli.config {
            Some(path) => GraphApiConfig::from_file(path)?,
            None => GraphApiConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        Ok(config)
    }

    fn token(&self) -> Result<&str> {
        self.cli.token.as_deref().ok_or_else(|| {
            Error::config("Access token not specified (use --token or INSTAGRAM_ACCESS_TOKEN)")
        })
    }
}
