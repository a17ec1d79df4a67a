//! Tool Registry - central registration and lookup for all tools.
//!
//! The registry maps tool names to descriptors and preserves registration
//! order for listing. Registration overwrites on re-register so that a
//! startup scan can run idempotently; an overwrite keeps the tool's original
//! position in the listing order.
//!
//! Descriptors are stored behind `Arc`, so a descriptor is constructed fully
//! before it becomes visible to readers and lookups hand out a cheap clone
//! of the handle. Concurrent `lookup`/`list` calls are safe while a
//! registration pass is in progress.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::descriptor::ToolDescriptor;

#[derive(Default)]
struct RegistryInner {
    tools: HashMap<String, Arc<ToolDescriptor>>,
    order: Vec<String>,
}

/// Concurrent mapping from tool name to descriptor.
#[derive(Default)]
pub struct ToolRegistry {
    inner: RwLock<RegistryInner>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, overwriting any existing tool with the same name.
    pub fn register(&self, descriptor: ToolDescriptor) {
        let descriptor = Arc::new(descriptor);
        let name = descriptor.name().to_string();

        let mut inner = self.inner.write().expect("tool registry lock poisoned");
        if inner.tools.insert(name.clone(), descriptor).is_none() {
            inner.order.push(name.clone());
        }
        debug!("Registered tool: {}", name);
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<ToolDescriptor>> {
        let inner = self.inner.read().expect("tool registry lock poisoned");
        inner.tools.get(name).cloned()
    }

    /// All registered tools, in registration order.
    pub fn list(&self) -> Vec<Arc<ToolDescriptor>> {
        let inner = self.inner.read().expect("tool registry lock poisoned");
        inner
            .order
            .iter()
            .filter_map(|name| inner.tools.get(name).cloned())
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.inner.read().expect("tool registry lock poisoned").order.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
