//! Request DTOs for the service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Request body for storing a result (PUT /cache)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key, usually produced by POST /keys
    pub key: String,
    /// Any JSON payload
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl SetRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Request body for building a cache key (POST /keys)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    /// Resource prefix, e.g. `products`
    pub prefix: String,
    /// Filter and pagination parameters
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl KeyRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.prefix.trim().is_empty() {
            return Some("Prefix cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "products:page:1", "value": {"total": 5}}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "products:page:1");
        assert_eq!(req.value, json!({"total": 5}));
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_set_request_with_ttl() {
        let json = r#"{"key": "test", "value": null, "ttl": 30}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(30));
        assert_eq!(req.value, Value::Null);
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: json!("test"),
            ttl: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_key_request_params_default_to_empty() {
        let req: KeyRequest = serde_json::from_str(r#"{"prefix": "product-types"}"#).unwrap();
        assert!(req.params.is_empty());
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_key_request_blank_prefix() {
        let req: KeyRequest = serde_json::from_str(r#"{"prefix": "  ", "params": {}}"#).unwrap();
        assert!(req.validate().is_some());
    }
}
