//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable operations that clients discover via `tools/list`
//! and invoke via `tools/call`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `descriptor.rs` - Parameter specs, tool descriptors and the handler trait
//! - `registry.rs` - Concurrent name-to-descriptor registry
//! - `binder.rs` - Binds raw JSON arguments to declared parameter types
//! - `schema.rs` - Derives `inputSchema` objects for discovery
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a handler struct, implement `ToolHandler`, and expose a
//!    `descriptor()` constructor
//! 3. Export it in `definitions/mod.rs` and add it to
//!    `register_builtin_tools()`

pub mod binder;
pub mod definitions;
pub mod descriptor;
mod error;
mod registry;
pub mod schema;

pub use binder::{ArgValue, BoundArgs};
pub use descriptor::{ParamType, ParameterSpec, ToolDescriptor, ToolHandler};
pub use error::{BindError, ToolError};
pub use registry::ToolRegistry;
