//! Client configuration: where the translation service lives.

use crate::error::{Result, TranslateError};

const TRANSLATE_PATH: &str = "/translate";

/// Endpoint configuration for the translation service. Constructed once
/// from the build environment; a missing or empty base URL is fatal for
/// the session, so it fails here rather than at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint_base_url: String,
}

impl ClientConfig {
    pub fn new(endpoint_base_url: Option<&str>) -> Result<Self> {
        match endpoint_base_url {
            Some(url) if !url.trim().is_empty() => Ok(Self {
                endpoint_base_url: url.trim_end_matches('/').to_string(),
            }),
            _ => Err(TranslateError::ConfigurationMissing),
        }
    }

    /// Full URL of the translation endpoint.
    pub fn translate_url(&self) -> String {
        format!("{}{}", self.endpoint_base_url, TRANSLATE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_url_is_fatal() {
        assert_eq!(ClientConfig::new(None), Err(TranslateError::ConfigurationMissing));
        assert_eq!(ClientConfig::new(Some("")), Err(TranslateError::ConfigurationMissing));
        assert_eq!(ClientConfig::new(Some("   ")), Err(TranslateError::ConfigurationMissing));
    }

    #[test]
    fn joins_the_translate_path() {
        let config = ClientConfig::new(Some("https://api.example.com")).unwrap();
        assert_eq!(config.translate_url(), "https://api.example.com/translate");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new(Some("https://api.example.com/")).unwrap();
        assert_eq!(config.translate_url(), "https://api.example.com/translate");
    }
}
