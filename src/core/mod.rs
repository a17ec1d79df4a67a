//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, error handling, the JSON-RPC protocol envelopes, the
//! request dispatcher, the per-request context, and the transport layer.

pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod server;
pub mod transport;

pub use config::Config;
pub use context::RequestContext;
pub use dispatcher::{DispatchOutcome, PROTOCOL_VERSION, RequestDispatcher};
pub use error::{Error, Result};
pub use protocol::{ErrorObject, JsonRpcResponse};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
