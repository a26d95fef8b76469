use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::auth::{AuthClient, AuthError};
use crate::gateway::{Gateway, GatewayError};
use crate::models::{Booking, BookingReceipt, Category, ProfileUpdate, SessionUser, Tutor};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct GatewayData {
    categories: Vec<Category>,
    tutors: Vec<Tutor>,
    bookings: Vec<Booking>,
    reads: usize,
    offline: bool,
    reject_bookings: bool,
}

/// In-memory Gateway for tests and local previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryGateway {
    data: Arc<Mutex<GatewayData>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        lock(&self.data).categories = categories;
        self
    }

    pub fn with_tutors(self, tutors: Vec<Tutor>) -> Self {
        lock(&self.data).tutors = tutors;
        self
    }

    /// Every request fails with a transport error.
    pub fn offline(self) -> Self {
        lock(&self.data).offline = true;
        self
    }

    /// Booking writes answer without an `insertedId`.
    pub fn rejecting_bookings(self) -> Self {
        lock(&self.data).reject_bookings = true;
        self
    }

    /// Bookings received so far, in order.
    pub fn bookings(&self) -> Vec<Booking> {
        lock(&self.data).bookings.clone()
    }

    /// Number of read requests served.
    pub fn reads(&self) -> usize {
        lock(&self.data).reads
    }

    fn begin_read(&self) -> Result<MutexGuard<'_, GatewayData>, GatewayError> {
        let mut data = lock(&self.data);
        if data.offline {
            return Err(GatewayError::Transport("offline".to_string()));
        }
        data.reads += 1;
        Ok(data)
    }
}

impl Gateway for MemoryGateway {
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        Ok(self.begin_read()?.categories.clone())
    }

    async fn list_tutors(&self) -> Result<Vec<Tutor>, GatewayError> {
        Ok(self.begin_read()?.tutors.clone())
    }

    async fn get_tutor(&self, id: &str) -> Result<Tutor, GatewayError> {
        self.begin_read()?
            .tutors
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(GatewayError::Status(404))
    }

    async fn create_booking(&self, booking: &Booking) -> Result<BookingReceipt, GatewayError> {
        let mut data = lock(&self.data);
        if data.offline {
            return Err(GatewayError::Transport("offline".to_string()));
        }
        data.bookings.push(booking.clone());
        if data.reject_bookings {
            return Ok(BookingReceipt::default());
        }
        Ok(BookingReceipt {
            inserted_id: Some(format!("booking-{}", data.bookings.len())),
        })
    }
}

/// A call received by [`MemoryAuth`], keyed by email where one is involved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCall {
    Login(String),
    Register(String),
    UpdateProfile(String),
    GoogleLogin,
}

#[derive(Debug, Default)]
struct AuthData {
    accounts: HashMap<String, String>,
    calls: Vec<AuthCall>,
    fail_profile_updates: bool,
}

/// In-memory AuthClient that records every call it receives.
#[derive(Clone, Debug, Default)]
pub struct MemoryAuth {
    data: Arc<Mutex<AuthData>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str) -> Self {
        lock(&self.data)
            .accounts
            .insert(email.to_string(), password.to_string());
        self
    }

    pub fn failing_profile_updates(self) -> Self {
        lock(&self.data).fail_profile_updates = true;
        self
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        lock(&self.data).calls.clone()
    }
}

fn local_user(email: &str) -> SessionUser {
    SessionUser {
        uid: format!("local:{email}"),
        email: email.to_string(),
        display_name: None,
        photo_url: None,
        id_token: format!("token:{email}"),
    }
}

impl AuthClient for MemoryAuth {
    async fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let mut data = lock(&self.data);
        data.calls.push(AuthCall::Login(email.to_string()));
        match data.accounts.get(email) {
            Some(stored) if stored == password => Ok(local_user(email)),
            _ => Err(AuthError::Rejected("INVALID_LOGIN_CREDENTIALS".to_string())),
        }
    }

    async fn register(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let mut data = lock(&self.data);
        data.calls.push(AuthCall::Register(email.to_string()));
        if data.accounts.contains_key(email) {
            return Err(AuthError::Rejected("EMAIL_EXISTS".to_string()));
        }
        data.accounts.insert(email.to_string(), password.to_string());
        Ok(local_user(email))
    }

    async fn update_profile(
        &self,
        user: &SessionUser,
        _update: &ProfileUpdate,
    ) -> Result<(), AuthError> {
        let mut data = lock(&self.data);
        data.calls.push(AuthCall::UpdateProfile(user.email.clone()));
        if data.fail_profile_updates {
            return Err(AuthError::Rejected("TOKEN_EXPIRED".to_string()));
        }
        Ok(())
    }

    async fn google_login(&self, access_token: &str) -> Result<SessionUser, AuthError> {
        lock(&self.data).calls.push(AuthCall::GoogleLogin);
        if access_token.is_empty() {
            return Err(AuthError::Rejected("INVALID_IDP_RESPONSE".to_string()));
        }
        Ok(local_user("google-user@example.com"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_gateway_fails_reads() {
        let gateway = MemoryGateway::new().offline();
        assert!(matches!(
            gateway.list_categories().await,
            Err(GatewayError::Transport(_))
        ));
        assert_eq!(gateway.reads(), 0);
    }

    #[tokio::test]
    async fn test_unknown_tutor_is_not_found() {
        let gateway = MemoryGateway::new();
        assert_eq!(
            gateway.get_tutor("missing").await,
            Err(GatewayError::Status(404))
        );
    }

    #[tokio::test]
    async fn test_reads_are_counted() {
        let gateway = MemoryGateway::new();
        gateway.list_tutors().await.unwrap();
        gateway.list_categories().await.unwrap();
        assert_eq!(gateway.reads(), 2);
    }
}
