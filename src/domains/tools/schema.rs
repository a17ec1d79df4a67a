//! Schema builder - derives a JSON Schema object from a tool descriptor.
//!
//! The generated schema is what `tools/list` reports as `inputSchema`. The
//! builder is a pure function over the descriptor: deterministic, no side
//! effects, re-derived on every discovery request.

use serde_json::{Map, Value, json};

use super::descriptor::{ParamType, ToolDescriptor};

/// Map a declared parameter type to its JSON Schema primitive name.
///
/// All declared types map onto the five schema-valid primitives; fractional
/// types collapse to `"number"` and both integer widths to `"integer"`.
pub fn schema_type(param_type: ParamType) -> &'static str {
    match param_type {
        ParamType::String => "string",
        ParamType::Integer | ParamType::Long => "integer",
        ParamType::Double | ParamType::Float => "number",
        ParamType::Boolean => "boolean",
        ParamType::Object => "object",
    }
}

/// Build the `inputSchema` object for a tool.
///
/// Returns `None` for tools with no declared parameters: discovery omits the
/// schema entirely rather than emitting an empty object. The `required`
/// array lists required parameter names in declaration order.
pub fn input_schema(tool: &ToolDescriptor) -> Option<Value> {
    if tool.parameters().is_empty() {
        return None;
    }

    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in tool.parameters() {
        let mut property = Map::new();
        property.insert("type".into(), json!(schema_type(param.param_type)));
        property.insert("description".into(), json!(param.description));
        if let Some(values) = &param.enum_values {
            property.insert("enum".into(), json!(values));
        }
        properties.insert(param.name.clone(), Value::Object(property));

        if param.required {
            required.push(param.name.clone());
        }
    }

    Some(json!({
        "type": "object",
        "properties": properties,
        "required": required,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::core::context::RequestContext;
    use crate::domains::tools::binder::BoundArgs;
    use crate::domains::tools::descriptor::{ParameterSpec, ToolHandler};
    use crate::domains::tools::error::ToolError;

    use super::*;

    struct NoopHandler;

    #[async_trait]
    impl ToolHandler for NoopHandler {
        async fn invoke(&self, _args: BoundArgs, _ctx: &RequestContext) -> Result<Value, ToolError> {
            Ok(Value::Null)
        }
    }

    fn descriptor(params: Vec<ParameterSpec>) -> ToolDescriptor {
        ToolDescriptor::new("test_tool", "A test tool", params, Arc::new(NoopHandler))
    }

    #[test]
    fn test_no_parameters_yields_no_schema() {
        let tool = descriptor(vec![]);
        assert!(input_schema(&tool).is_none());
    }

    #[test]
    fn test_type_mapping() {
        assert_eq!(schema_type(ParamType::String), "string");
        assert_eq!(schema_type(ParamType::Integer), "integer");
        assert_eq!(schema_type(ParamType::Long), "integer");
        assert_eq!(schema_type(ParamType::Double), "number");
        assert_eq!(schema_type(ParamType::Float), "number");
        assert_eq!(schema_type(ParamType::Boolean), "boolean");
        assert_eq!(schema_type(ParamType::Object), "object");
    }

    #[test]
    fn test_required_lists_only_required_in_declaration_order() {
        let tool = descriptor(vec![
            ParameterSpec::new("zulu", "Last alphabetically", ParamType::String).required(),
            ParameterSpec::new("alpha", "First alphabetically", ParamType::Integer),
            ParameterSpec::new("mike", "Middle", ParamType::Boolean).required(),
        ]);

        let schema = input_schema(&tool).unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["zulu", "mike"]));
    }

    #[test]
    fn test_properties_carry_type_and_description() {
        let tool = descriptor(vec![
            ParameterSpec::new("city", "Name of the city", ParamType::String).required(),
        ]);

        let schema = input_schema(&tool).unwrap();
        let city = &schema["properties"]["city"];
        assert_eq!(city["type"], "string");
        assert_eq!(city["description"], "Name of the city");
        assert!(city.get("enum").is_none());
    }

    #[test]
    fn test_enum_values_emitted() {
        let tool = descriptor(vec![
            ParameterSpec::new("operation", "Operation", ParamType::String)
                .required()
                .with_enum(&["add", "subtract", "multiply", "divide"]),
        ]);

        let schema = input_schema(&tool).unwrap();
        assert_eq!(
            schema["properties"]["operation"]["enum"],
            json!(["add", "subtract", "multiply", "divide"])
        );
    }

    #[test]
    fn test_schema_is_deterministic() {
        let tool = descriptor(vec![
            ParameterSpec::new("a", "A", ParamType::Double).required(),
            ParameterSpec::new("b", "B", ParamType::Object),
        ]);

        assert_eq!(input_schema(&tool), input_schema(&tool));
    }
}
