//! Parameter binder - converts raw JSON arguments into typed values.
//!
//! For each declared parameter, in declaration order:
//! 1. If the arguments contain the parameter, coerce the raw JSON value to
//!    the declared type.
//! 2. Otherwise, if the parameter is required, the bind fails with
//!    [`BindError::MissingRequired`].
//! 3. Otherwise the type's zero value is substituted so that handlers always
//!    receive a value of the expected shape, never null.
//!
//! Coercion is lenient: a value that cannot be parsed as its declared type
//! falls back to its raw string representation instead of aborting the call.
//! Malformed numeric input degrades to a string the handler can inspect.

use serde_json::{Map, Value};

use super::descriptor::{ParamType, ToolDescriptor};
use super::error::BindError;

// ============================================================================
// Bound Values
// ============================================================================

/// A single argument after binding.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Object(Map<String, Value>),
}

impl ArgValue {
    /// The zero value for a declared type, used when an optional parameter
    /// is absent.
    pub fn zero(param_type: ParamType) -> Self {
        match param_type {
            ParamType::String => Self::Str(String::new()),
            ParamType::Integer | ParamType::Long => Self::Int(0),
            ParamType::Double | ParamType::Float => Self::Float(0.0),
            ParamType::Boolean => Self::Bool(false),
            ParamType::Object => Self::Object(Map::new()),
        }
    }

    /// View this value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// View this value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// View this value as a float. Integers widen losslessly enough for
    /// tool arguments.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// View this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// View this value as a JSON object, if it is one.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Object(o) => write!(f, "{}", Value::Object(o.clone())),
        }
    }
}

/// Arguments bound for one invocation, in parameter declaration order.
#[derive(Debug, Clone, Default)]
pub struct BoundArgs {
    values: Vec<ArgValue>,
}

impl BoundArgs {
    /// Number of bound arguments (equals the number of declared parameters).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the tool declared no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The argument at the given declaration position.
    pub fn get(&self, index: usize) -> Option<&ArgValue> {
        self.values.get(index)
    }

    /// Positional string accessor.
    pub fn str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(ArgValue::as_str)
    }

    /// Positional integer accessor.
    pub fn i64(&self, index: usize) -> Option<i64> {
        self.get(index).and_then(ArgValue::as_i64)
    }

    /// Positional float accessor.
    pub fn f64(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(ArgValue::as_f64)
    }

    /// Positional boolean accessor.
    pub fn bool(&self, index: usize) -> Option<bool> {
        self.get(index).and_then(ArgValue::as_bool)
    }

    /// The raw text of the argument at the given position, for error messages.
    pub fn display(&self, index: usize) -> String {
        self.get(index).map(ToString::to_string).unwrap_or_default()
    }
}

// ============================================================================
// Binding
// ============================================================================

/// Bind raw JSON arguments to a tool's declared parameters.
///
/// Returns the bound arguments in declaration order, or
/// [`BindError::MissingRequired`] when a required parameter is absent.
/// Coercion failures never fail the bind; see the module docs.
pub fn bind(descriptor: &ToolDescriptor, raw_args: &Map<String, Value>) -> Result<BoundArgs, BindError> {
    let mut values = Vec::with_capacity(descriptor.parameters().len());

    for param in descriptor.parameters() {
        match raw_args.get(&param.name) {
            Some(raw) => values.push(coerce(raw, param.param_type)),
            None if param.required => {
                return Err(BindError::MissingRequired(param.name.clone()));
            }
            None => values.push(ArgValue::zero(param.param_type)),
        }
    }

    Ok(BoundArgs { values })
}

/// Coerce one raw JSON value to a declared type, degrading to the raw
/// string representation on parse failure.
fn coerce(raw: &Value, param_type: ParamType) -> ArgValue {
    let text = raw_text(raw);

    match param_type {
        ParamType::String => ArgValue::Str(text),
        ParamType::Integer | ParamType::Long => match raw.as_i64().or_else(|| text.parse().ok()) {
            Some(i) => ArgValue::Int(i),
            None => ArgValue::Str(text),
        },
        ParamType::Double | ParamType::Float => match raw.as_f64().or_else(|| text.parse().ok()) {
            Some(f) => ArgValue::Float(f),
            None => ArgValue::Str(text),
        },
        ParamType::Boolean => match raw.as_bool().or_else(|| text.parse().ok()) {
            Some(b) => ArgValue::Bool(b),
            None => ArgValue::Str(text),
        },
        ParamType::Object => match raw.as_object() {
            Some(o) => ArgValue::Object(o.clone()),
            None => ArgValue::Str(text),
        },
    }
}

/// The string representation of a raw JSON value: string contents without
/// quotes, compact JSON for everything else.
fn raw_text(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
