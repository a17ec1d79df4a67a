//! Per-request ambient context.
//!
//! A [`RequestContext`] is built by the transport for each inbound request
//! and threaded explicitly into the tool invocation. It lives for exactly
//! one call and is dropped afterwards, so caller-identifying data can never
//! leak across requests or be observed by concurrent invocations.

use std::collections::HashMap;

/// Ambient data visible to a tool handler during a single invocation.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    headers: HashMap<String, String>,
}

impl RequestContext {
    /// A context with no ambient data (stdio transport, tests).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a context from transport headers. Header names are stored
    /// lowercased for case-insensitive lookup.
    pub fn with_headers(headers: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value))
                .collect(),
        }
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_has_no_headers() {
        let ctx = RequestContext::empty();
        assert!(ctx.header("authorization").is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let ctx = RequestContext::with_headers([(
            "X-Caller-Id".to_string(),
            "client-42".to_string(),
        )]);

        assert_eq!(ctx.header("x-caller-id"), Some("client-42"));
        assert_eq!(ctx.header("X-CALLER-ID"), Some("client-42"));
    }
}
