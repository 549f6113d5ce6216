//! Server configuration from the environment.

/// Default listen address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: String,
}

impl Config {
    /// Reads `APIERR_ADDR`, falling back to [`DEFAULT_ADDR`].
    pub fn from_env() -> Self {
        Self {
            addr: std::env::var("APIERR_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}
