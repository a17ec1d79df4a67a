//! Streamable MCP Server Library
//!
//! This crate provides a minimal Model Context Protocol (MCP) server built
//! around an explicit tool registry, a JSON-RPC request dispatcher and a
//! dynamic parameter binder.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the JSON-RPC envelopes, the
//!   request dispatcher, and the transport layer
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: descriptors, registry, binder, schema builder, and the
//!     built-in tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use streamable_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, RequestDispatcher, Result};
