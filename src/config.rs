use config::{Config, Environment};

/// Runtime settings, resolved once at startup and passed by reference.
#[derive(Debug)]
pub struct Settings {
    pub finnhub_api_key: String,
    pub fred_api_key: String,
    /// Development mode: enables verbose call-level logging.
    pub debug: bool,
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        // Retrieve the api keys from .env / the process environment
        let s = Config::builder().add_source(Environment::default()).build()?;
        Ok(Self::from_lookup(|key| s.get_string(&key.to_lowercase()).ok()))
    }

    /// Builds settings from an injected variable lookup. Absent keys fall
    /// back to an empty string (api keys) or false (debug flag).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Settings {
            finnhub_api_key: lookup("VITE_FINNHUB_API_KEY").unwrap_or_default(),
            fred_api_key: lookup("VITE_FRED_API_KEY").unwrap_or_default(),
            debug: lookup("DEV")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
