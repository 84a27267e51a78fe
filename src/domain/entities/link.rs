//! Link entity representing a shortened URL mapping.

/// A mapping from a short code to the URL it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_code: String,
    pub long_url: String,
}

impl Link {
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}
