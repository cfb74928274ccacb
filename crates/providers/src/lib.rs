//! LLM provider implementations for twinvoice.
//!
//! All providers implement the `twinvoice_core::Provider` trait.

pub mod openai_compat;

pub use openai_compat::{parse_completion, OpenAiCompatProvider, GROQ_BASE_URL};

use std::time::Duration;
use twinvoice_config::AppConfig;
use twinvoice_core::error::ProviderError;

/// Build the configured provider.
///
/// Fails with `NotConfigured` when no API key is available.
pub fn from_config(config: &AppConfig) -> Result<OpenAiCompatProvider, ProviderError> {
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            ProviderError::NotConfigured(
                "no API key: set api_key in config.toml, TWINVOICE_API_KEY or GROQ_API_KEY".into(),
            )
        })?;

    let name = if config.api_url.trim_end_matches('/') == GROQ_BASE_URL {
        "groq"
    } else {
        "openai_compat"
    };

    OpenAiCompatProvider::new(
        name,
        config.api_url.as_str(),
        api_key,
        Duration::from_secs(config.request_timeout_secs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinvoice_core::Provider;

    #[test]
    fn missing_key_is_not_configured() {
        let config = AppConfig::default();
        assert!(matches!(
            from_config(&config),
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[test]
    fn default_endpoint_is_groq() {
        let config = AppConfig {
            api_key: Some("gsk-test".into()),
            ..AppConfig::default()
        };
        let provider = from_config(&config).unwrap();
        assert_eq!(provider.name(), "groq");
    }

    #[test]
    fn custom_endpoint() {
        let config = AppConfig {
            api_key: Some("sk".into()),
            api_url: "http://localhost:11434/v1/".into(),
            ..AppConfig::default()
        };
        let provider = from_config(&config).unwrap();
        assert_eq!(provider.name(), "openai_compat");
        assert_eq!(provider.base_url(), "http://localhost:11434/v1");
    }
}
