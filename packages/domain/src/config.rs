//! # Application configuration — `tutorhive.toml`
//!
//! ```toml
//! [gateway]
//! base_url = "https://tutor-hive-sever.vercel.app"
//!
//! [identity]
//! endpoint = "https://identitytoolkit.googleapis.com/v1"
//! api_key = "..."
//! google_client_id = "....apps.googleusercontent.com"
//! redirect_uri = "http://localhost:8080/auth/google/callback"
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.
//! [`AppConfig::with_overrides`] layers `TUTORHIVE_*` variables on top; the
//! `api` crate decides where those variables come from on each target.

use serde::{Deserialize, Serialize};

pub const GATEWAY_URL_VAR: &str = "TUTORHIVE_GATEWAY_URL";
pub const IDENTITY_API_KEY_VAR: &str = "TUTORHIVE_IDENTITY_API_KEY";
pub const GOOGLE_CLIENT_ID_VAR: &str = "TUTORHIVE_GOOGLE_CLIENT_ID";
pub const REDIRECT_URI_VAR: &str = "TUTORHIVE_REDIRECT_URI";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid tutorhive.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Where category, tutor and booking data live.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_url")]
    pub base_url: String,
}

/// Identity provider settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    /// OAuth client id for the Google sign-in redirect.
    #[serde(default)]
    pub google_client_id: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
}

fn default_gateway_url() -> String {
    "https://tutor-hive-sever.vercel.app".to_string()
}

fn default_identity_endpoint() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_redirect_uri() -> String {
    "http://localhost:8080/auth/google/callback".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_gateway_url(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            endpoint: default_identity_endpoint(),
            api_key: String::new(),
            google_client_id: String::new(),
            redirect_uri: default_redirect_uri(),
        }
    }
}

impl AppConfig {
    pub fn filename() -> &'static str {
        "tutorhive.toml"
    }

    /// Parse from TOML and normalise URLs.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        Ok(config.normalized())
    }

    /// Replace fields with non-empty values returned by `lookup` for the
    /// `TUTORHIVE_*` variable names.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(url) = value(GATEWAY_URL_VAR) {
            self.gateway.base_url = url;
        }
        if let Some(key) = value(IDENTITY_API_KEY_VAR) {
            self.identity.api_key = key;
        }
        if let Some(id) = value(GOOGLE_CLIENT_ID_VAR) {
            self.identity.google_client_id = id;
        }
        if let Some(uri) = value(REDIRECT_URI_VAR) {
            self.identity.redirect_uri = uri;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.gateway.base_url = trim_url(&self.gateway.base_url);
        self.identity.endpoint = trim_url(&self.identity.endpoint);
        self
    }
}

fn trim_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.gateway.base_url, "https://tutor-hive-sever.vercel.app");
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml(
            r#"
            [gateway]
            base_url = "http://localhost:5000/"

            [identity]
            api_key = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:5000");
        assert_eq!(config.identity.api_key, "abc");
        assert_eq!(
            config.identity.endpoint,
            "https://identitytoolkit.googleapis.com/v1"
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            AppConfig::from_toml("[gateway\nbase_url = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let config = AppConfig::default().with_overrides(|name| match name {
            GATEWAY_URL_VAR => Some("https://staging.example.com/".to_string()),
            IDENTITY_API_KEY_VAR => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.gateway.base_url, "https://staging.example.com");
        assert!(config.identity.api_key.is_empty());
    }
}
