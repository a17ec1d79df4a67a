//! Request dispatcher - routes JSON-RPC envelopes to protocol handlers.
//!
//! One pass per request, no state carried between calls. The dispatcher
//! parses the envelope, routes on the method name, and produces a
//! [`DispatchOutcome`] the transport maps onto its own status signalling.
//!
//! Every failure below the envelope-parse level is recovered into an error
//! object inside a normal response envelope; callers never see a bare
//! transport fault for business-logic errors.

use std::sync::Arc;

use serde_json::{Map, Value, json};
use tracing::{info, instrument, warn};

use crate::domains::tools::{ToolRegistry, binder, schema};

use super::context::RequestContext;
use super::protocol::JsonRpcResponse;

/// MCP protocol compatibility constant reported by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// The result of dispatching one request body.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// A fully handled request, including embedded-error cases.
    Reply(JsonRpcResponse),

    /// An unrecognized method; the transport should signal failure itself.
    BadRequest(JsonRpcResponse),

    /// A notification (no `id`): acknowledged without a response body.
    Accepted,

    /// The body was not a JSON object or lacked a usable `method` field.
    ParseFailure,
}

/// Stateless per-request dispatcher over a shared tool registry.
pub struct RequestDispatcher {
    name: String,
    version: String,
    registry: Arc<ToolRegistry>,
}

impl RequestDispatcher {
    /// Create a dispatcher with static server identity and a registry.
    pub fn new(name: impl Into<String>, version: impl Into<String>, registry: Arc<ToolRegistry>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            registry,
        }
    }

    /// The tool registry this dispatcher routes `tools/*` calls to.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Dispatch one raw request body.
    ///
    /// The context is scoped to this call only and is handed to the tool
    /// handler during `tools/call`.
    #[instrument(skip_all)]
    pub async fn dispatch(&self, body: &str, ctx: &RequestContext) -> DispatchOutcome {
        let Ok(envelope) = serde_json::from_str::<Value>(body) else {
            warn!("Request body is not valid JSON");
            return DispatchOutcome::ParseFailure;
        };
        let Some(request) = envelope.as_object() else {
            warn!("Request body is not a JSON object");
            return DispatchOutcome::ParseFailure;
        };

        // A request without an id is a notification: acknowledged with no
        // response body, regardless of method.
        let Some(id) = request.get("id").cloned() else {
            info!("Received notification, no response body");
            return DispatchOutcome::Accepted;
        };
        let id = Some(id);

        let Some(method) = request.get("method").and_then(Value::as_str) else {
            warn!("Request envelope lacks a method field");
            return DispatchOutcome::ParseFailure;
        };

        info!("Dispatching method: {}", method);

        match method {
            "initialize" => DispatchOutcome::Reply(self.handle_initialize(id)),
            "tools/list" => DispatchOutcome::Reply(self.handle_tools_list(id)),
            "tools/call" => {
                DispatchOutcome::Reply(self.handle_tools_call(id, request.get("params"), ctx).await)
            }
            "ping" => DispatchOutcome::Reply(JsonRpcResponse::success(id, json!({}))),
            other => {
                warn!("Unsupported method: {}", other);
                DispatchOutcome::BadRequest(JsonRpcResponse::method_not_found(
                    id,
                    format!("Unsupported method: {}", other),
                ))
            }
        }
    }

    /// Handle `initialize`: static identity and capabilities.
    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {},
                "serverInfo": {
                    "name": self.name,
                    "version": self.version,
                },
            }),
        )
    }

    /// Handle `tools/list`: enumerate registered tools with derived schemas.
    ///
    /// Tools without parameters carry no `inputSchema` key at all.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools: Vec<Value> = self
            .registry
            .list()
            .iter()
            .map(|tool| {
                let mut entry = Map::new();
                entry.insert("name".into(), json!(tool.name()));
                entry.insert("description".into(), json!(tool.description()));
                if let Some(input_schema) = schema::input_schema(tool) {
                    entry.insert("inputSchema".into(), input_schema);
                }
                Value::Object(entry)
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    /// Handle `tools/call`: lookup, bind, invoke, wrap.
    async fn handle_tools_call(
        &self,
        id: Option<Value>,
        params: Option<&Value>,
        ctx: &RequestContext,
    ) -> JsonRpcResponse {
        let Some(name) = params
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
        else {
            return JsonRpcResponse::invalid_params(id, "Missing tool name");
        };

        let arguments = params
            .and_then(|p| p.get("arguments"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let Some(tool) = self.registry.lookup(name) else {
            warn!("Tool not found: {}", name);
            return JsonRpcResponse::method_not_found(id, format!("Tool not found: {}", name));
        };

        let args = match binder::bind(&tool, &arguments) {
            Ok(args) => args,
            Err(e) => {
                warn!("Argument binding failed for {}: {}", name, e);
                return JsonRpcResponse::invalid_params(id, e.to_string());
            }
        };

        match tool.handler().invoke(args, ctx).await {
            Ok(value) => JsonRpcResponse::success(
                id,
                json!({
                    "content": [{
                        "type": "text",
                        "text": render_text(&value),
                    }],
                }),
            ),
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                JsonRpcResponse::internal_error(
                    id,
                    format!("Tool {} execution failed: {}", name, e),
                )
            }
        }
    }
}

/// Render a tool's return value as display text. Structured values are
/// serialized compactly rather than passed through as JSON.
fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::core::protocol::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};
    use crate::domains::tools::definitions::register_builtin_tools;
    use crate::domains::tools::{
        BoundArgs, ParamType, ParameterSpec, ToolDescriptor, ToolError, ToolHandler,
    };

    use super::*;

    fn dispatcher() -> RequestDispatcher {
        let registry = Arc::new(ToolRegistry::new());
        register_builtin_tools(&registry);
        RequestDispatcher::new("test-server", "0.1.0", registry)
    }

    async fn dispatch(dispatcher: &RequestDispatcher, body: &str) -> DispatchOutcome {
        dispatcher.dispatch(body, &RequestContext::empty()).await
    }

    fn reply(outcome: DispatchOutcome) -> JsonRpcResponse {
        match outcome {
            DispatchOutcome::Reply(response) => response,
            other => panic!("Expected Reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_initialize() {
        let d = dispatcher();
        let body = r#"{"id": "1", "method": "initialize", "params": {}}"#;
        let response = reply(dispatch(&d, body).await);

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["capabilities"], json!({}));
        assert_eq!(result["serverInfo"]["name"], "test-server");
        assert_eq!(result["serverInfo"]["version"], "0.1.0");
    }

    #[tokio::test]
    async fn test_ping_returns_empty_object() {
        let d = dispatcher();
        let response = reply(dispatch(&d, r#"{"id": 1, "method": "ping"}"#).await);
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_tools_list_contains_builtins() {
        let d = dispatcher();
        let response = reply(dispatch(&d, r#"{"id": "1", "method": "tools/list"}"#).await);

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "getWeather");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["city"]));
        assert_eq!(tools[1]["name"], "calculate");
    }

    #[tokio::test]
    async fn test_tools_list_is_idempotent() {
        let d = dispatcher();
        let first = reply(dispatch(&d, r#"{"id": "1", "method": "tools/list"}"#).await);
        let second = reply(dispatch(&d, r#"{"id": "1", "method": "tools/list"}"#).await);
        assert_eq!(first.result, second.result);
    }

    #[tokio::test]
    async fn test_tools_list_omits_schema_for_parameterless_tool() {
        struct NoArgHandler;

        #[async_trait]
        impl ToolHandler for NoArgHandler {
            async fn invoke(
                &self,
                _args: BoundArgs,
                _ctx: &RequestContext,
            ) -> Result<Value, ToolError> {
                Ok(Value::String("ok".into()))
            }
        }

        let registry = Arc::new(ToolRegistry::new());
        registry.register(ToolDescriptor::new(
            "noop",
            "Takes nothing",
            vec![],
            Arc::new(NoArgHandler),
        ));
        let d = RequestDispatcher::new("test-server", "0.1.0", registry);

        let response = reply(dispatch(&d, r#"{"id": "1", "method": "tools/list"}"#).await);
        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 1);
        assert!(tools[0].get("inputSchema").is_none());
    }

    #[tokio::test]
    async fn test_tools_call_weather() {
        let d = dispatcher();
        let body = r#"{"id": "9", "method": "tools/call", "params": {"name": "getWeather", "arguments": {"city": "Beijing"}}}"#;
        let response = reply(dispatch(&d, body).await);

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        assert!(text.contains("Beijing"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let d = dispatcher();
        let body = r#"{"id": "2", "method": "tools/call", "params": {"name": "doesNotExist", "arguments": {}}}"#;
        let response = reply(dispatch(&d, body).await);

        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert!(error.message.contains("doesNotExist"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_required_parameter() {
        let d = dispatcher();
        let body = r#"{"id": "3", "method": "tools/call", "params": {"name": "getWeather", "arguments": {}}}"#;
        let response = reply(dispatch(&d, body).await);

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("city"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_name() {
        let d = dispatcher();
        let body = r#"{"id": "4", "method": "tools/call", "params": {"arguments": {}}}"#;
        let response = reply(dispatch(&d, body).await);
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_handler_failure() {
        let d = dispatcher();
        let body = r#"{"id": "5", "method": "tools/call", "params": {"name": "calculate", "arguments": {"num1": "abc", "num2": 1, "operation": "add"}}}"#;
        let response = reply(dispatch(&d, body).await);

        let error = response.error.unwrap();
        assert_eq!(error.code, INTERNAL_ERROR);
        assert!(error.message.contains("calculate"));
        assert!(error.message.contains("abc"));
    }

    #[tokio::test]
    async fn test_unrecognized_method_is_bad_request() {
        let d = dispatcher();
        let outcome = dispatch(&d, r#"{"id": "6", "method": "notAMethod"}"#).await;

        match outcome {
            DispatchOutcome::BadRequest(response) => {
                let error = response.error.unwrap();
                assert_eq!(error.code, METHOD_NOT_FOUND);
                assert!(error.message.contains("notAMethod"));
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_notification_is_accepted_without_body() {
        let d = dispatcher();
        let outcome = dispatch(&d, r#"{"method": "tools/list"}"#).await;
        assert!(matches!(outcome, DispatchOutcome::Accepted));

        // No id wins over a missing method as well.
        let outcome = dispatch(&d, r#"{"params": {}}"#).await;
        assert!(matches!(outcome, DispatchOutcome::Accepted));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_failure() {
        let d = dispatcher();
        assert!(matches!(
            dispatch(&d, "{not json").await,
            DispatchOutcome::ParseFailure
        ));
        assert!(matches!(
            dispatch(&d, r#""just a string""#).await,
            DispatchOutcome::ParseFailure
        ));
        assert!(matches!(
            dispatch(&d, r#"{"id": "1", "params": {}}"#).await,
            DispatchOutcome::ParseFailure
        ));
    }

    #[tokio::test]
    async fn test_structured_return_value_is_stringified() {
        struct StructuredHandler;

        #[async_trait]
        impl ToolHandler for StructuredHandler {
            async fn invoke(
                &self,
                _args: BoundArgs,
                _ctx: &RequestContext,
            ) -> Result<Value, ToolError> {
                Ok(json!({"answer": 42}))
            }
        }

        let registry = Arc::new(ToolRegistry::new());
        registry.register(ToolDescriptor::new(
            "structured",
            "Returns an object",
            vec![ParameterSpec::new("ignored", "", ParamType::String)],
            Arc::new(StructuredHandler),
        ));
        let d = RequestDispatcher::new("test-server", "0.1.0", registry);

        let body = r#"{"id": "7", "method": "tools/call", "params": {"name": "structured"}}"#;
        let response = reply(dispatch(&d, body).await);
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], r#"{"answer":42}"#);
    }
}
