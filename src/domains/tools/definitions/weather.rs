//! Weather lookup tool definition.
//!
//! A demo tool that returns a canned forecast for a city.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::core::context::RequestContext;
use crate::domains::tools::binder::BoundArgs;
use crate::domains::tools::descriptor::{ParamType, ParameterSpec, ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;

/// Weather tool - reports the (simulated) current weather for a city.
pub struct WeatherTool;

impl WeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getWeather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current weather for a city";

    /// Build the descriptor for registration.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            vec![ParameterSpec::new("city", "Name of the city", ParamType::String).required()],
            Arc::new(Self),
        )
    }
}

#[async_trait]
impl ToolHandler for WeatherTool {
    async fn invoke(&self, args: BoundArgs, _ctx: &RequestContext) -> Result<Value, ToolError> {
        let city = args.str(0).unwrap_or_default();
        if city.is_empty() {
            return Err(ToolError::execution_failed("city must not be empty"));
        }

        info!("Weather lookup for {}", city);

        // Simulated forecast; a real deployment would call a weather API here.
        Ok(Value::String(format!("{}: sunny, 25°C", city)))
    }
}
