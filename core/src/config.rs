//! Client configuration: base URL and default headers.
//!
//! A `ClientConfig` is assembled once, then moved into `ApiClient`, which
//! keeps it behind an `Arc` and never hands out a mutable reference.

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "LIBRARY_API_BASE_URL";

const CONTENT_TYPE: &str = "content-type";
const JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Config for `base_url` with the JSON content-type header.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: vec![(CONTENT_TYPE.to_string(), JSON.to_string())],
        }
    }

    /// Read the base URL from `LIBRARY_API_BASE_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(url.trim()),
            None => Self::default(),
        }
    }

    /// Add or replace a default header (matched case-insensitively).
    ///
    /// `content-type` is pinned to `application/json`; attempts to set it
    /// are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if name.eq_ignore_ascii_case(CONTENT_TYPE) {
            return self;
        }
        self.default_headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.default_headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }
}
