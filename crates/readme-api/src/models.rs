//! Request and response bodies.
//!
//! Bodies are decoded from raw bytes so clients need not send a JSON
//! content type. A body binds only if it parses and every required field
//! is present; required strings must also be non-empty.

use std::collections::HashMap;

use readme_core::{Error, Result, Table};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// Binding
// ============================================================================

/// A JSON request body with required fields.
pub trait RequestBody: DeserializeOwned {
    /// Body name reported when binding fails.
    const NAME: &'static str;

    /// Returns `true` if every required field carries a value.
    fn has_required_fields(&self) -> bool;
}

/// Decode and validate a request body.
///
/// # Errors
///
/// [`Error::MalformedRequest`] naming `T` when the bytes are not valid JSON
/// for `T` or a required field is empty.
pub fn bind<T: RequestBody>(bytes: &[u8]) -> Result<T> {
    let body: T = serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(body = T::NAME, error = %e, "request body rejected");
        Error::MalformedRequest(T::NAME)
    })?;
    if !body.has_required_fields() {
        tracing::debug!(body = T::NAME, "request body missing required value");
        return Err(Error::MalformedRequest(T::NAME));
    }
    Ok(body)
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body of `PUT /readme/{id}/header`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddHeaderRequest {
    /// `SMALL_HEADING`, `MEDIUM_HEADING` or `LARGE_HEADING`.
    pub header_type: String,
    /// Heading text.
    pub value: String,
}

impl RequestBody for AddHeaderRequest {
    const NAME: &'static str = "AddHeaderRequest";

    fn has_required_fields(&self) -> bool {
        !self.header_type.is_empty() && !self.value.is_empty()
    }
}

/// Body of `PUT /readme/{id}/code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCodeRequest {
    /// Fence language tag.
    pub code_language: String,
    /// Code body.
    pub value: String,
}

impl RequestBody for AddCodeRequest {
    const NAME: &'static str = "AddCodeRequest";

    fn has_required_fields(&self) -> bool {
        !self.code_language.is_empty() && !self.value.is_empty()
    }
}

/// Body of `PUT /readme/{id}/link` and `PUT /readme/{id}/image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLinkRequest {
    /// Link text or image alt text.
    pub description: String,
    /// Target URL.
    pub link: String,
}

impl RequestBody for AddLinkRequest {
    const NAME: &'static str = "AddLinkRequest";

    fn has_required_fields(&self) -> bool {
        !self.description.is_empty() && !self.link.is_empty()
    }
}

/// Body of `PUT /readme/{id}/table`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTableRequest {
    /// Column names in display order.
    pub column_names: Vec<String>,
    /// Cell values keyed by column name.
    pub column_values: HashMap<String, Vec<String>>,
}

impl RequestBody for AddTableRequest {
    const NAME: &'static str = "AddTableRequest";

    // Empty lists are allowed; presence is enforced by deserialization.
    fn has_required_fields(&self) -> bool {
        true
    }
}

impl From<AddTableRequest> for Table {
    fn from(req: AddTableRequest) -> Self {
        Table::new(req.column_names, req.column_values)
    }
}

// ============================================================================
// Query parameters
// ============================================================================

/// Raw query pairs in request order.
///
/// Repeated keys are kept; lookups take the first occurrence, so
/// `?paragraph=x&paragraph=y` reads as `x`.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value for `key`, if present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, or the empty string.
    pub fn first_or_empty(&self, key: &str) -> &str {
        self.first(key).unwrap_or_default()
    }
}

// ============================================================================
// Responses
// ============================================================================

/// `{"message": ...}` envelope used by every endpoint but the fragment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_header() {
        let req: AddHeaderRequest =
            bind(br#"{"header_type": "SMALL_HEADING", "value": "Hi"}"#).unwrap();
        assert_eq!(req.header_type, "SMALL_HEADING");
        assert_eq!(req.value, "Hi");
    }

    #[test]
    fn test_bind_missing_field() {
        let err = bind::<AddHeaderRequest>(br#"{"value": "Hi"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incorrect request body, should be AddHeaderRequest body"
        );
    }

    #[test]
    fn test_bind_empty_string_field() {
        assert!(matches!(
            bind::<AddLinkRequest>(br#"{"description": "", "link": "https://x"}"#),
            Err(Error::MalformedRequest("AddLinkRequest"))
        ));
    }

    #[test]
    fn test_bind_invalid_json() {
        assert!(matches!(
            bind::<AddCodeRequest>(b"not json"),
            Err(Error::MalformedRequest("AddCodeRequest"))
        ));
        assert!(matches!(
            bind::<AddCodeRequest>(b""),
            Err(Error::MalformedRequest("AddCodeRequest"))
        ));
    }

    #[test]
    fn test_bind_table() {
        let req: AddTableRequest = bind(
            br#"{"column_names": ["c1"], "column_values": {"c1": ["a", "b"]}}"#,
        )
        .unwrap();
        let table = Table::from(req);
        assert_eq!(table.columns, vec!["c1"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_bind_table_empty_collections() {
        let req: AddTableRequest =
            bind(br#"{"column_names": [], "column_values": {}}"#).unwrap();
        assert!(req.column_names.is_empty());
    }

    #[test]
    fn test_bind_table_null_rejected() {
        assert!(matches!(
            bind::<AddTableRequest>(br#"{"column_names": null, "column_values": {}}"#),
            Err(Error::MalformedRequest("AddTableRequest"))
        ));
        assert!(bind::<AddTableRequest>(b"{}").is_err());
    }

    fn query(raw: &str) -> QueryParams {
        serde_json::from_value(serde_json::json!(
            raw.split('&')
                .filter(|p| !p.is_empty())
                .map(|p| p.split_once('=').unwrap_or((p, "")))
                .collect::<Vec<_>>()
        ))
        .unwrap()
    }

    #[test]
    fn test_query_params_first_value_wins() {
        let params = query("paragraph=x&paragraph=y&name=a");
        assert_eq!(params.first("paragraph"), Some("x"));
        assert_eq!(params.first("name"), Some("a"));
        assert_eq!(params.first("blockquote"), None);
        assert_eq!(params.first_or_empty("blockquote"), "");
    }

    #[test]
    fn test_query_params_empty() {
        let params = QueryParams::default();
        assert_eq!(params.first("name"), None);
        assert_eq!(query("").first_or_empty("paragraph"), "");
    }

    #[test]
    fn test_message_response_json() {
        let json = serde_json::to_string(&MessageResponse::new("> q\n")).unwrap();
        assert_eq!(json, r#"{"message":"> q\n"}"#);
    }
}
