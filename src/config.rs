use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone)]
pub struct Config {
    /// Base URL of the backend, without the `/api/v1` prefix.
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("BOOK_NOOK_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
