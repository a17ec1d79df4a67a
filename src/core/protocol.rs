//! JSON-RPC 2.0 envelope types and builders.
//!
//! Pure assembly of response envelopes: a response carries either `result`
//! or `error`, never both. The fixed error codes follow the JSON-RPC
//! convention used by MCP.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `method`/`tool` not found.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid or missing parameters.
pub const INVALID_PARAMS: i32 = -32602;
/// Internal failure while invoking a tool.
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

/// JSON-RPC response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(ErrorObject {
                code,
                message: message.into(),
            }),
        }
    }

    /// Method or tool not found error.
    pub fn method_not_found(id: Option<Value>, message: impl Into<String>) -> Self {
        Self::error(id, METHOD_NOT_FOUND, message)
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<Value>, message: impl Into<String>) -> Self {
        Self::error(id, INVALID_PARAMS, message)
    }

    /// Internal error.
    pub fn internal_error(id: Option<Value>, message: impl Into<String>) -> Self {
        Self::error(id, INTERNAL_ERROR, message)
    }
}
