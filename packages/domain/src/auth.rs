//! # Authentication flows
//!
//! Credential checks and account storage belong to an external identity
//! provider, reached through the [`AuthClient`] trait. This module holds the
//! client-side sequencing around it:
//!
//! - [`login`]: one `login` call.
//! - [`register`]: local password rules first, then `register` followed by
//!   `update_profile`. A weak password never reaches the provider.
//! - [`google_login`]: exchanges a Google access token for a session.
//!
//! Failures are returned to the form, which reports them and goes back to idle.

use crate::models::{ProfileUpdate, SessionUser};
use crate::password::{validate_password, PasswordRule};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Transport(String),
    /// The provider refused the request (bad credentials, email taken, ...).
    #[error("{0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// The identity provider's client-facing surface.
pub trait AuthClient {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<SessionUser, AuthError>>;

    /// Create an account and sign it in.
    fn register(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<SessionUser, AuthError>>;

    fn update_profile(
        &self,
        user: &SessionUser,
        update: &ProfileUpdate,
    ) -> impl std::future::Future<Output = Result<(), AuthError>>;

    /// Sign in with an access token obtained from Google's OAuth redirect.
    fn google_login(
        &self,
        access_token: &str,
    ) -> impl std::future::Future<Output = Result<SessionUser, AuthError>>;
}

/// Values read from the login form at submit time.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Values read from the registration form at submit time.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub photo_url: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterError {
    #[error("password does not meet the requirements")]
    WeakPassword(Vec<PasswordRule>),
    #[error("Registration failed: {0}")]
    Create(AuthError),
    #[error("Error updating profile: {0}")]
    Profile(AuthError),
}

impl RegisterError {
    /// One notification per problem.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::WeakPassword(rules) => rules.iter().map(|r| r.message().to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

pub async fn login<C: AuthClient>(client: &C, form: &LoginForm) -> Result<SessionUser, AuthError> {
    let user = client.login(form.email.trim(), &form.password).await?;
    tracing::info!(email = %user.email, "signed in");
    Ok(user)
}

/// Validate, create the account, then set its profile.
///
/// The returned user already carries the new display name and photo.
pub async fn register<C: AuthClient>(
    client: &C,
    form: &RegisterForm,
) -> Result<SessionUser, RegisterError> {
    validate_password(&form.password).map_err(RegisterError::WeakPassword)?;

    let created = client
        .register(form.email.trim(), &form.password)
        .await
        .map_err(RegisterError::Create)?;

    let update = ProfileUpdate {
        display_name: form.name.trim().to_string(),
        photo_url: form.photo_url.trim().to_string(),
    };
    client
        .update_profile(&created, &update)
        .await
        .map_err(RegisterError::Profile)?;

    tracing::info!(email = %created.email, "registered");
    Ok(SessionUser {
        display_name: Some(update.display_name),
        photo_url: Some(update.photo_url),
        ..created
    })
}

pub async fn google_login<C: AuthClient>(
    client: &C,
    access_token: &str,
) -> Result<SessionUser, AuthError> {
    let user = client.google_login(access_token).await?;
    tracing::info!(email = %user.email, "signed in with Google");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{AuthCall, MemoryAuth};

    fn register_form(password: &str) -> RegisterForm {
        RegisterForm {
            name: "Rafi".to_string(),
            photo_url: "https://img/rafi.png".to_string(),
            email: "rafi@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_lowercase_password_makes_no_calls() {
        let client = MemoryAuth::new();

        let err = register(&client, &register_form("abc")).await.unwrap_err();
        let RegisterError::WeakPassword(rules) = &err else {
            panic!("expected weak password, got {err:?}");
        };
        assert!(rules.contains(&PasswordRule::Uppercase));
        assert!(err
            .messages()
            .contains(&"Password must contain at least one uppercase letter".to_string()));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_uppercase_password_makes_no_calls() {
        let client = MemoryAuth::new();

        let err = register(&client, &register_form("ABCDEFGH")).await.unwrap_err();
        let messages = err.messages();
        assert!(messages.contains(&"Password must contain at least one number".to_string()));
        assert!(messages
            .contains(&"Password must contain at least one lowercase letter".to_string()));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_creates_then_updates_profile() {
        let client = MemoryAuth::new();

        let user = register(&client, &register_form("Abcdef12")).await.unwrap();
        assert_eq!(
            client.calls(),
            vec![
                AuthCall::Register("rafi@example.com".to_string()),
                AuthCall::UpdateProfile("rafi@example.com".to_string()),
            ]
        );
        assert_eq!(user.display_name.as_deref(), Some("Rafi"));
        assert_eq!(user.photo_url.as_deref(), Some("https://img/rafi.png"));
    }

    #[tokio::test]
    async fn test_register_existing_email_fails_before_profile_update() {
        let client = MemoryAuth::new().with_account("rafi@example.com", "Abcdef12");

        let err = register(&client, &register_form("Abcdef12")).await.unwrap_err();
        assert!(matches!(err, RegisterError::Create(AuthError::Rejected(_))));
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_register_profile_failure_is_distinct() {
        let client = MemoryAuth::new().failing_profile_updates();

        let err = register(&client, &register_form("Abcdef12")).await.unwrap_err();
        assert!(matches!(err, RegisterError::Profile(_)));
        assert!(err.to_string().starts_with("Error updating profile"));
    }

    #[tokio::test]
    async fn test_login_with_known_account() {
        let client = MemoryAuth::new().with_account("me@example.com", "Secret123");
        let form = LoginForm {
            email: " me@example.com ".to_string(),
            password: "Secret123".to_string(),
        };

        let user = login(&client, &form).await.unwrap();
        assert_eq!(user.email, "me@example.com");
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let client = MemoryAuth::new().with_account("me@example.com", "Secret123");
        let form = LoginForm {
            email: "me@example.com".to_string(),
            password: "nope".to_string(),
        };

        assert!(matches!(
            login(&client, &form).await,
            Err(AuthError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_google_login() {
        let client = MemoryAuth::new();
        let user = google_login(&client, "google-access-token").await.unwrap();
        assert_eq!(client.calls(), vec![AuthCall::GoogleLogin]);
        assert!(!user.email.is_empty());
    }
}
