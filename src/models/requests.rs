//! Request DTOs for the cache server API
//!
//! Every operation takes its arguments as query parameters.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Query parameters for `POST /cache/put`
///
/// All fields are optional at decode time so that a missing parameter is
/// reported as an `InvalidArgument` rather than a generic decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PutParams {
    /// The cache key
    pub key: Option<String>,
    /// The value to store
    pub value: Option<String>,
    /// Time-to-live in milliseconds, parsed by `validate`
    pub ttl: Option<String>,
}

impl PutParams {
    /// Validates the parameters and returns `(key, value, ttl)`.
    pub fn validate(self) -> Result<(String, String, Duration)> {
        let key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(CacheError::InvalidArgument("Key is required".to_string())),
        };
        let value = self
            .value
            .ok_or_else(|| CacheError::InvalidArgument("Value is required".to_string()))?;
        let ttl_ms: i64 = self
            .ttl
            .ok_or_else(|| CacheError::InvalidArgument("TTL is required".to_string()))?
            .parse()
            .map_err(|_| CacheError::InvalidArgument("TTL must be an integer".to_string()))?;
        if ttl_ms <= 0 {
            return Err(CacheError::InvalidArgument(
                "TTL must be greater than zero".to_string(),
            ));
        }
        let ttl = Duration::from_millis(ttl_ms as u64);
        Ok((key, value, ttl))
    }
}

/// Query parameters for `GET /cache/get` and `DELETE /cache/delete`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyParams {
    /// The cache key; missing is treated as the empty key
    #[serde(default)]
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(key: Option<&str>, value: Option<&str>, ttl: Option<&str>) -> PutParams {
        PutParams {
            key: key.map(str::to_string),
            value: value.map(str::to_string),
            ttl: ttl.map(str::to_string),
        }
    }

    #[test]
    fn test_put_params_deserialize() {
        let json = r#"{"key": "employee:101", "value": "Alice", "ttl": "5000"}"#;
        let req: PutParams = serde_json::from_str(json).unwrap();
        assert_eq!(req.key.as_deref(), Some("employee:101"));
        assert_eq!(req.value.as_deref(), Some("Alice"));
        assert_eq!(req.ttl.as_deref(), Some("5000"));
    }

    #[test]
    fn test_validate_valid_request() {
        let (key, value, ttl) = params(Some("k"), Some("v"), Some("5000")).validate().unwrap();
        assert_eq!(key, "k");
        assert_eq!(value, "v");
        assert_eq!(ttl, Duration::from_millis(5000));
    }

    #[test]
    fn test_validate_empty_value_is_allowed() {
        assert!(params(Some("k"), Some(""), Some("1")).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(params(None, Some("v"), Some("5000")).validate().is_err());
        assert!(params(Some(""), Some("v"), Some("5000")).validate().is_err());
        assert!(params(Some("k"), None, Some("5000")).validate().is_err());
        assert!(params(Some("k"), Some("v"), None).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_ttl() {
        assert!(matches!(
            params(Some("k"), Some("v"), Some("0")).validate(),
            Err(CacheError::InvalidArgument(_))
        ));
        assert!(matches!(
            params(Some("k"), Some("v"), Some("-1")).validate(),
            Err(CacheError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_ttl() {
        for ttl in ["abc", "", "1.5", "99999999999999999999"] {
            let err = params(Some("k"), Some("v"), Some(ttl)).validate().unwrap_err();
            assert_eq!(
                err,
                CacheError::InvalidArgument("TTL must be an integer".to_string()),
                "ttl: {:?}",
                ttl
            );
        }
    }

    #[test]
    fn test_key_params_default_to_empty() {
        let req: KeyParams = serde_json::from_str("{}").unwrap();
        assert_eq!(req.key, "");
    }
}
