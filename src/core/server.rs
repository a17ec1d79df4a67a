//! MCP server composition root.
//!
//! `McpServer::new` is the single place where the pieces are wired together:
//! it builds the tool registry, runs the explicit registration pass for the
//! built-in tools, and constructs the request dispatcher with the server's
//! static identity. Transports receive the assembled server and only route
//! bytes to the dispatcher.

use std::sync::Arc;

use tracing::info;

use crate::domains::tools::{ToolRegistry, definitions};

use super::config::Config;
use super::dispatcher::RequestDispatcher;

/// The assembled MCP server: configuration, registry and dispatcher.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    registry: Arc<ToolRegistry>,
    dispatcher: Arc<RequestDispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let registry = Arc::new(ToolRegistry::new());
        definitions::register_builtin_tools(&registry);
        info!("Registered {} tools", registry.len());

        let dispatcher = Arc::new(RequestDispatcher::new(
            config.server.name.clone(),
            config.server.version.clone(),
            registry.clone(),
        ));

        Self {
            config,
            registry,
            dispatcher,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry (for registering additional tools at startup).
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Get the request dispatcher driving all transports.
    pub fn dispatcher(&self) -> Arc<RequestDispatcher> {
        self.dispatcher.clone()
    }
}
