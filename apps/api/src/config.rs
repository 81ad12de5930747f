use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which upstream generative-language provider the proxy calls.
/// Selected by `UPSTREAM_PROVIDER`; response reshaping is the same for both,
/// so the client never sees which provider answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Gemini,
    DeepSeek,
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "deepseek" => Ok(Provider::DeepSeek),
            other => bail!("Unknown UPSTREAM_PROVIDER '{other}' (expected 'gemini' or 'deepseek')"),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// The provider API keys are deliberately optional: their absence is a
/// per-request failure surfaced on the first call, not a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub gemini_api_key: Option<String>,
    pub deepseek_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = match std::env::var("UPSTREAM_PROVIDER") {
            Ok(value) => value.parse::<Provider>()?,
            Err(_) => Provider::default(),
        };

        Ok(Config {
            provider,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            deepseek_api_key: optional_env("DEEPSEEK_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The API key for the selected provider, if configured.
    pub fn api_key(&self) -> Option<&str> {
        match self.provider {
            Provider::Gemini => self.gemini_api_key.as_deref(),
            Provider::DeepSeek => self.deepseek_api_key.as_deref(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parses_case_insensitively() {
        assert_eq!("gemini".parse::<Provider>().unwrap(), Provider::Gemini);
        assert_eq!("DeepSeek".parse::<Provider>().unwrap(), Provider::DeepSeek);
        assert_eq!("GEMINI".parse::<Provider>().unwrap(), Provider::Gemini);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        assert!("openai".parse::<Provider>().is_err());
    }

    #[test]
    fn test_default_provider_is_gemini() {
        assert_eq!(Provider::default(), Provider::Gemini);
    }

    #[test]
    fn test_api_key_follows_selected_provider() {
        let config = Config {
            provider: Provider::DeepSeek,
            gemini_api_key: Some("g-key".to_string()),
            deepseek_api_key: Some("d-key".to_string()),
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.api_key(), Some("d-key"));
    }

    #[test]
    fn test_api_key_absent_when_selected_provider_has_none() {
        let config = Config {
            provider: Provider::Gemini,
            gemini_api_key: None,
            deepseek_api_key: Some("d-key".to_string()),
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.api_key(), None);
    }
}
