//! Tool definitions module.
//!
//! This module exports all built-in tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod calculator;
pub mod weather;

pub use calculator::CalculatorTool;
pub use weather::WeatherTool;

use super::registry::ToolRegistry;

/// Register every built-in tool.
///
/// Called once by the composition root at startup. Registration is
/// idempotent: re-running the pass overwrites descriptors in place.
pub fn register_builtin_tools(registry: &ToolRegistry) {
    registry.register(WeatherTool::descriptor());
    registry.register(CalculatorTool::descriptor());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registration() {
        let registry = ToolRegistry::new();
        register_builtin_tools(&registry);

        assert_eq!(registry.len(), 2);
        assert!(registry.lookup(WeatherTool::NAME).is_some());
        assert!(registry.lookup(CalculatorTool::NAME).is_some());
    }

    #[test]
    fn test_registration_is_idempotent() {
        let registry = ToolRegistry::new();
        register_builtin_tools(&registry);
        register_builtin_tools(&registry);

        assert_eq!(registry.len(), 2);
    }
}
