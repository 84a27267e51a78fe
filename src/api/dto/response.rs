//! JSON body shared by every response.

use serde::{Deserialize, Serialize};

/// Response body, tagged by a `status` field.
///
/// ```json
/// {"status":"success","short_url":"1a2b3c4d"}
/// {"status":"error","message":"Short URL not found"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    Success { short_url: String },
    Error { message: String },
}

impl ApiResponse {
    pub fn success(short_url: impl Into<String>) -> Self {
        Self::Success {
            short_url: short_url.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
