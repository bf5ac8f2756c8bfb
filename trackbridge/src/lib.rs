//! # Trackbridge
//!
//! An MCP adapter library that exposes remote issue-tracker operations as
//! callable tools.
//!
//! ## Features
//!
//! - **Tool Surface**: create/list/update issues, teams, projects, labels,
//!   cycles, comments, attachments, users, and sub-issue linking
//! - **Remote Client**: Linear-compatible GraphQL client over HTTPS
//! - **MCP Support**: Model Context Protocol server integration via rmcp
//! - **Flat Responses**: the remote object graph is reshaped into flat JSON
//!   payloads with documented fields
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trackbridge::client::HttpTracker;
//! use trackbridge::config::TrackerConfig;
//! use trackbridge::mcp::McpServer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TrackerConfig::from_env()?;
//! let tracker = Arc::new(HttpTracker::new(config)?);
//! let server = McpServer::new(tracker);
//! // hand `server` to rmcp's serve_server with a stdio transport
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Error types for tracker and MCP operations
pub mod error;

/// Tracker connection configuration
pub mod config;

/// Domain models mirroring the remote tracker's object graph
pub mod models;

/// Remote tracker client: trait seam, HTTP implementation, in-memory mock
pub mod client;

/// Model Context Protocol (MCP) server support
pub mod mcp;

// Re-export core types
pub use config::TrackerConfig;
pub use error::{Result, TrackbridgeError};

/// Library version, sourced from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
