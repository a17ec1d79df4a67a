//! Static tool metadata: parameter specifications and tool descriptors.
//!
//! A [`ToolDescriptor`] is the unit of registration: a name, a description,
//! an ordered list of declared parameters, and the handler that executes the
//! tool. Descriptors are built fully before they are handed to the registry
//! and are never mutated afterwards.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::context::RequestContext;

use super::binder::BoundArgs;
use super::error::ToolError;

// ============================================================================
// Parameter Specification
// ============================================================================

/// The declared type of a tool parameter.
///
/// The binder coerces raw JSON argument values to this type; the schema
/// builder maps it onto a JSON Schema primitive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Long,
    Double,
    Float,
    Boolean,
    Object,
}

/// Declaration of a single tool parameter.
///
/// The order in which specs appear in a [`ToolDescriptor`] defines the
/// positional binding order seen by the handler.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    /// Parameter name, unique within a tool.
    pub name: String,

    /// Human-readable description shown in discovery responses.
    pub description: String,

    /// Declared type used for binding and schema generation.
    pub param_type: ParamType,

    /// Whether the caller must provide this parameter.
    pub required: bool,

    /// Allowed values, emitted as a schema `enum` when present.
    pub enum_values: Option<Vec<String>>,
}

impl ParameterSpec {
    /// Create an optional parameter with the given name, description and type.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        param_type: ParamType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type,
            required: false,
            enum_values: None,
        }
    }

    /// Mark this parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict this parameter to a fixed set of values.
    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }
}

// ============================================================================
// Tool Handler
// ============================================================================

/// The callable bound to a registered tool.
///
/// Handlers receive the arguments already bound to their declared types, in
/// declaration order, together with the per-request context. The returned
/// value is rendered to its text form by the dispatcher before it is sent
/// to the client.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with the given bound arguments.
    async fn invoke(&self, args: BoundArgs, ctx: &RequestContext) -> Result<Value, ToolError>;
}

// ============================================================================
// Tool Descriptor
// ============================================================================

/// Immutable metadata and handler for one registered tool.
pub struct ToolDescriptor {
    name: String,
    description: String,
    parameters: Vec<ParameterSpec>,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    /// Create a descriptor binding a name and parameter declarations to a handler.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParameterSpec>,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler,
        }
    }

    /// The globally unique tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tool description shown to clients.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared parameters, in binding order.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// The handler to invoke for this tool.
    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopHandler;

    #[async_trait]
    impl ToolHandler for NoopHandler {
        async fn invoke(&self, _args: BoundArgs, _ctx: &RequestContext) -> Result<Value, ToolError> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn test_parameter_spec_builder() {
        let spec = ParameterSpec::new("operation", "Operation to perform", ParamType::String)
            .required()
            .with_enum(&["add", "subtract"]);

        assert_eq!(spec.name, "operation");
        assert!(spec.required);
        assert_eq!(
            spec.enum_values.as_deref(),
            Some(&["add".to_string(), "subtract".to_string()][..])
        );
    }

    #[test]
    fn test_parameter_spec_defaults_to_optional() {
        let spec = ParameterSpec::new("limit", "Max results", ParamType::Integer);
        assert!(!spec.required);
        assert!(spec.enum_values.is_none());
    }

    #[test]
    fn test_descriptor_preserves_parameter_order() {
        let descriptor = ToolDescriptor::new(
            "demo",
            "A demo tool",
            vec![
                ParameterSpec::new("first", "First", ParamType::String),
                ParameterSpec::new("second", "Second", ParamType::Integer),
            ],
            Arc::new(NoopHandler),
        );

        let names: Vec<_> = descriptor.parameters().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
