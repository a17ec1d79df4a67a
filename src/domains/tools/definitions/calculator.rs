//! Calculator tool definition.
//!
//! A demo tool performing basic arithmetic over two numbers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::core::context::RequestContext;
use crate::domains::tools::binder::BoundArgs;
use crate::domains::tools::descriptor::{ParamType, ParameterSpec, ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;

/// Calculator tool - add, subtract, multiply or divide two numbers.
pub struct CalculatorTool;

impl CalculatorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Simple calculator for two operands";

    /// Build the descriptor for registration.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            vec![
                ParameterSpec::new("num1", "First operand", ParamType::Double).required(),
                ParameterSpec::new("num2", "Second operand", ParamType::Double).required(),
                ParameterSpec::new("operation", "Operation to perform", ParamType::String)
                    .required()
                    .with_enum(&["add", "subtract", "multiply", "divide"]),
            ],
            Arc::new(Self),
        )
    }
}

#[async_trait]
impl ToolHandler for CalculatorTool {
    async fn invoke(&self, args: BoundArgs, _ctx: &RequestContext) -> Result<Value, ToolError> {
        // The binder degrades unparseable numbers to strings, so a non-numeric
        // operand surfaces here as an execution failure rather than a bind error.
        let num1 = args.f64(0).ok_or_else(|| {
            ToolError::execution_failed(format!("num1 is not a number: {}", args.display(0)))
        })?;
        let num2 = args.f64(1).ok_or_else(|| {
            ToolError::execution_failed(format!("num2 is not a number: {}", args.display(1)))
        })?;
        let operation = args.str(2).unwrap_or_default();

        info!("Calculating {} {} {}", num1, operation, num2);

        let result = match operation {
            "add" => num1 + num2,
            "subtract" => num1 - num2,
            "multiply" => num1 * num2,
            "divide" => {
                if num2 == 0.0 {
                    return Err(ToolError::execution_failed("division by zero"));
                }
                num1 / num2
            }
            other => {
                return Err(ToolError::execution_failed(format!(
                    "Unsupported operation: {}",
                    other
                )));
            }
        };

        Ok(Value::String(format!("Result: {:.2}", result)))
    }
}
