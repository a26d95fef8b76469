//! Configuration loading for each target.
//!
//! The bundled `tutorhive.toml` is compiled in, then `TUTORHIVE_*` variables are
//! layered on top. Native builds read them from the process environment after
//! loading `.env`; the browser has no environment, so wasm builds take the
//! values present when the bundle was built.

use domain::config::{AppConfig, IDENTITY_API_KEY_VAR};

const BUNDLED_CONFIG: &str = include_str!("../tutorhive.toml");

/// Load the effective configuration. Never fails: a broken bundled file is
/// logged and replaced by the defaults.
pub fn load_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    let bundled = match AppConfig::from_toml(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}; using defaults");
            AppConfig::default()
        }
    };
    let config = bundled.with_overrides(lookup);

    if config.identity.api_key.is_empty() {
        tracing::warn!("{IDENTITY_API_KEY_VAR} is not set; sign-in requests will be rejected");
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup(name: &str) -> Option<String> {
    use domain::config::{GATEWAY_URL_VAR, GOOGLE_CLIENT_ID_VAR, REDIRECT_URI_VAR};

    let value = match name {
        GATEWAY_URL_VAR => option_env!("TUTORHIVE_GATEWAY_URL"),
        IDENTITY_API_KEY_VAR => option_env!("TUTORHIVE_IDENTITY_API_KEY"),
        GOOGLE_CLIENT_ID_VAR => option_env!("TUTORHIVE_GOOGLE_CLIENT_ID"),
        REDIRECT_URI_VAR => option_env!("TUTORHIVE_REDIRECT_URI"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_toml(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.gateway.base_url, "https://tutor-hive-sever.vercel.app");
        assert!(config.identity.redirect_uri.ends_with("/auth/google/callback"));
    }
}
