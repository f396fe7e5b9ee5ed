//! HTTP client module
//!
//! Provides the authorized Graph API client and its configuration.
//!
//! # Features
//!
//! - **Bearer Auth**: Every request carries `Authorization: Bearer <token>`
//! - **Raw Bodies**: Responses come back as text for every status code
//! - **Pooled Transport**: One connection pool per client, shared by clones

mod client;
mod config;

pub use client::GraphApi;
pub use config::{GraphApiConfig, GraphApiConfigBuilder, DEFAULT_BASE_URL};
