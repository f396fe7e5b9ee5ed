//! CLI commands and argument parsing

use crate::content::{Content, JSON_CONTENT_TYPE};
use crate::error::{Result, ResultExt};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

/// Instagram Graph API command-line client
#[derive(Parser, Debug)]
#[command(name = "instagram-graph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Access token sent as `Authorization: Bearer <token>`
    #[arg(
        short,
        long,
        global = true,
        env = "INSTAGRAM_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "INSTAGRAM_GRAPH_BASE_URL")]
    pub base_url: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// GET an endpoint
    Get {
        /// Endpoint path and query, e.g. `me?fields=id,username`
        endpoint: String,
    },

    /// POST a body to an endpoint
    Post {
        /// Endpoint path and query
        endpoint: String,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// PUT a body to an endpoint
    Put {
        /// Endpoint path and query
        endpoint: String,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// DELETE an endpoint
    Delete {
        /// Endpoint path and query
        endpoint: String,
    },
}

/// Request body options shared by `post` and `put`
#[derive(Args, Debug, Clone)]
pub struct BodyArgs {
    /// Inline request body
    #[arg(short, long, conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the request body from a file
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Content type of the request body
    #[arg(long, default_value = JSON_CONTENT_TYPE)]
    pub content_type: String,
}

impl BodyArgs {
    /// Build the request content; no body means an empty payload
    pub fn content(&self) -> Result<Content> {
        let body = match (&self.data, &self.data_file) {
            (Some(data), _) => data.clone().into_bytes(),
            (None, Some(path)) => fs::read(path)
                .with_context(|| format!("Failed to read body file '{}'", path.display()))?,
            (None, None) => Vec::new(),
        };
        Ok(Content::new(body, self.content_type.clone()))
    }
}
