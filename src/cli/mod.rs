//! CLI module
//!
//! Command-line interface for one-off Graph API calls.
//!
//! # Commands
//!
//! - `get` - Fetch an endpoint
//! - `post` - Send a body to an endpoint
//! - `put` - Replace a resource with a body
//! - `delete` - Delete a resource

mod commands;
mod runner;

pub use commands::{BodyArgs, Cli, Commands};
pub use runner::{log_filter, Runner};
