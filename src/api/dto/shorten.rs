//! Request body of the shorten endpoint.
//!
//! Parsing never fails: a malformed body, a missing key or a value that is
//! not a string all read as an absent field.

use serde_json::Value;
use tracing::{debug, warn};

/// Fields read from a `POST /shorten` body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShortenRequest {
    /// URL to shorten. Required by the handler.
    pub url: Option<String>,
    /// Custom short code.
    pub short_path: Option<String>,
}

impl ShortenRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let parsed = match serde_json::from_slice::<Value>(body) {
            Ok(value) => value,
            Err(e) => {
                warn!("Error parsing JSON: {}", e);
                return Self::default();
            }
        };

        Self {
            url: string_field(&parsed, "url"),
            short_path: string_field(&parsed, "short_path"),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            warn!("Key {} is not a string: {}", key, other);
            None
        }
        None => {
            debug!("Key not found: {}", key);
            None
        }
    }
}
