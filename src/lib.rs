//! # Instagram Graph
//!
//! A minimal authorized HTTP client for the Instagram Graph API.
//!
//! Each call sends one request to `https://graph.instagram.com/<endpoint>`
//! with an `Authorization: Bearer <token>` header and hands back the raw
//! response body as a `String`, whatever the status code. Parsing the body,
//! spotting API errors in it, paginating and refreshing tokens are left to
//! the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use instagram_graph::{Content, GraphApi, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = GraphApi::new()?;
//!
//!     let me = api.get("me?fields=id,username", "TOKEN").await?;
//!     println!("{me}");
//!
//!     let content = Content::json(&serde_json::json!({ "creation_id": "999" }))?;
//!     let published = api.post("me/media_publish", "TOKEN", content).await?;
//!     println!("{published}");
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Request body content
pub mod content;

/// Graph API client and configuration
pub mod http;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use content::Content;
pub use error::{Error, Result};
pub use http::{GraphApi, GraphApiConfig, DEFAULT_BASE_URL};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
