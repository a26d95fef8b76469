//! # Google sign-in redirect
//!
//! Google sign-in uses the OAuth implicit flow:
//!
//! 1. [`google_authorize_url`] builds the consent URL. The `state` parameter
//!    carries the route to return to, since the redirect reloads the page and
//!    drops all in-memory state.
//! 2. Google redirects to `redirect_uri#access_token=...&state=...`.
//! 3. [`parse_google_callback`] pulls the token (or Google's `error`) out of
//!    that URL, and the token goes to [`domain::AuthClient::google_login`].

use domain::config::IdentityConfig;
use domain::AuthError;
use reqwest::Url;

pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// What Google handed back on the redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoogleCallback {
    pub access_token: String,
    /// The `state` sent with the authorize request, if any.
    pub state: Option<String>,
}

pub fn google_authorize_url(config: &IdentityConfig, state: &str) -> Result<String, AuthError> {
    if config.google_client_id.trim().is_empty() {
        return Err(AuthError::Rejected(
            "Google sign-in is not configured".to_string(),
        ));
    }
    let url = Url::parse_with_params(
        GOOGLE_AUTHORIZE_URL,
        &[
            ("client_id", config.google_client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("response_type", "token"),
            ("scope", "openid email profile"),
            ("include_granted_scopes", "true"),
            ("state", state),
        ],
    )
    .map_err(|e| AuthError::Decode(e.to_string()))?;
    Ok(url.into())
}

/// Read the access token from the full callback URL (`location.href`).
pub fn parse_google_callback(href: &str) -> Result<GoogleCallback, AuthError> {
    let mut url = Url::parse(href).map_err(|e| AuthError::Decode(e.to_string()))?;
    let fragment = url.fragment().unwrap_or_default().to_string();
    // Reuse the query parser for the fragment's `k=v&k=v` pairs.
    url.set_query(Some(&fragment));

    let mut access_token = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(AuthError::Rejected(error));
    }
    match access_token.filter(|t| !t.is_empty()) {
        Some(access_token) => Ok(GoogleCallback {
            access_token,
            state: state.filter(|s| !s.is_empty()),
        }),
        None => Err(AuthError::Decode(
            "callback is missing access_token".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IdentityConfig {
        IdentityConfig {
            google_client_id: "client-1.apps.googleusercontent.com".to_string(),
            ..IdentityConfig::default()
        }
    }

    #[test]
    fn test_authorize_url_parameters() {
        let url = google_authorize_url(&config(), "/tutors/42").unwrap();
        let parsed = Url::parse(&url).unwrap();
        assert!(url.starts_with(GOOGLE_AUTHORIZE_URL));

        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("response_type".to_string(), "token".to_string())));
        assert!(pairs.contains(&("state".to_string(), "/tutors/42".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:8080/auth/google/callback".to_string()
        )));
    }

    #[test]
    fn test_authorize_url_requires_client_id() {
        let err = google_authorize_url(&IdentityConfig::default(), "/").unwrap_err();
        assert!(matches!(err, AuthError::Rejected(_)));
    }

    #[test]
    fn test_parse_callback() {
        let callback = parse_google_callback(
            "http://localhost:8080/auth/google/callback#state=%2Ftutors%2F42&access_token=ya29.abc&token_type=Bearer&expires_in=3599",
        )
        .unwrap();
        assert_eq!(callback.access_token, "ya29.abc");
        assert_eq!(callback.state.as_deref(), Some("/tutors/42"));
    }

    #[test]
    fn test_parse_callback_error() {
        let err = parse_google_callback(
            "http://localhost:8080/auth/google/callback#error=access_denied&state=%2F",
        )
        .unwrap_err();
        assert_eq!(err, AuthError::Rejected("access_denied".to_string()));
    }

    #[test]
    fn test_parse_callback_without_fragment() {
        let err = parse_google_callback("http://localhost:8080/auth/google/callback").unwrap_err();
        assert!(matches!(err, AuthError::Decode(_)));
    }
}
