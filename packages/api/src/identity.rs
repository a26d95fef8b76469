//! # Identity provider client
//!
//! [`IdentityClient`] implements [`domain::AuthClient`] over the Identity
//! Toolkit REST protocol (`{endpoint}/accounts:{method}?key={api_key}`):
//!
//! | Operation | Method |
//! |-----------|--------|
//! | `login` | `accounts:signInWithPassword` |
//! | `register` | `accounts:signUp` |
//! | `update_profile` | `accounts:update` |
//! | `google_login` | `accounts:signInWithIdp` with a Google access token |
//!
//! Failed calls answer `{ "error": { "message": "EMAIL_EXISTS" } }`; the code is
//! turned into a readable [`AuthError::Rejected`].

use domain::config::IdentityConfig;
use domain::{AuthClient, AuthError, ProfileUpdate, SessionUser};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Debug)]
pub struct IdentityClient {
    client: Client,
    config: IdentityConfig,
}

/// Fields shared by the sign-in, sign-up and IdP responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
    id_token: String,
}

impl SignInResponse {
    fn into_session(self, fallback_email: &str) -> SessionUser {
        SessionUser {
            uid: self.local_id,
            email: self
                .email
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| fallback_email.to_string()),
            display_name: self.display_name.filter(|n| !n.is_empty()),
            photo_url: self.photo_url.or(self.profile_picture),
            id_token: self.id_token,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityClient {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    fn url(&self, method: &str) -> String {
        format!(
            "{}/accounts:{method}?key={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.api_key
        )
    }

    async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        tracing::debug!("identity accounts:{method}");
        let response = self
            .client
            .post(self.url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        decode(status, &text)
    }
}

fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AuthError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| describe(&envelope.error.message))
            .unwrap_or_else(|_| format!("identity provider returned status {status}"));
        return Err(AuthError::Rejected(message));
    }
    serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))
}

/// Readable text for the provider's error codes. Codes may carry a detail
/// suffix such as `"WEAK_PASSWORD : Password should be at least 6 characters"`.
fn describe(code: &str) -> String {
    let (head, detail) = match code.split_once(" : ") {
        Some((head, detail)) => (head.trim(), Some(detail.trim())),
        None => (code.trim(), None),
    };
    match head {
        "EMAIL_EXISTS" => "An account with this email already exists".to_string(),
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password".to_string()
        }
        "USER_DISABLED" => "This account has been disabled".to_string(),
        "INVALID_EMAIL" => "Please enter a valid email".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts, try again later".to_string(),
        _ => detail.unwrap_or(head).to_string(),
    }
}

impl AuthClient for IdentityClient {
    async fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let body = json!({ "email": email, "password": password, "returnSecureToken": true });
        let response: SignInResponse = self.call("signInWithPassword", &body).await?;
        Ok(response.into_session(email))
    }

    async fn register(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let body = json!({ "email": email, "password": password, "returnSecureToken": true });
        let response: SignInResponse = self.call("signUp", &body).await?;
        Ok(response.into_session(email))
    }

    async fn update_profile(
        &self,
        user: &SessionUser,
        update: &ProfileUpdate,
    ) -> Result<(), AuthError> {
        let body = json!({
            "idToken": user.id_token,
            "displayName": update.display_name,
            "photoUrl": update.photo_url,
            "returnSecureToken": false,
        });
        let _: serde_json::Value = self.call("update", &body).await?;
        Ok(())
    }

    async fn google_login(&self, access_token: &str) -> Result<SessionUser, AuthError> {
        // Google access tokens are URL-safe, so the post body needs no escaping.
        let body = json!({
            "postBody": format!("access_token={access_token}&providerId=google.com"),
            "requestUri": self.config.redirect_uri,
            "returnIdpCredential": true,
            "returnSecureToken": true,
        });
        let response: SignInResponse = self.call("signInWithIdp", &body).await?;
        Ok(response.into_session(""))
    }
}
