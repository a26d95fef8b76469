//! The remote data gateway seen from the client.

use crate::models::{Booking, BookingReceipt, Category, Tutor};

/// Why a gateway request did not produce a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request never got a response (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Transport(String),
    /// The gateway answered with a non-success status.
    #[error("gateway returned status {0}")]
    Status(u16),
    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Async interface to the category/tutor/booking endpoints.
///
/// Implementations live in the `api` crate (HTTP) and in [`crate::memory`]
/// (in-memory, for tests).
pub trait Gateway {
    /// `GET /category`
    fn list_categories(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Category>, GatewayError>>;

    /// `GET /tutors`
    fn list_tutors(&self) -> impl std::future::Future<Output = Result<Vec<Tutor>, GatewayError>>;

    /// `GET /tutors/{id}`
    fn get_tutor(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Tutor, GatewayError>>;

    /// `POST /book-tutors`
    fn create_booking(
        &self,
        booking: &Booking,
    ) -> impl std::future::Future<Output = Result<BookingReceipt, GatewayError>>;
}
