//! Booking a tutor from the detail page.

use crate::gateway::{Gateway, GatewayError};
use crate::models::{Booking, BookingReceipt, SessionUser, Tutor};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    /// No one is signed in; nothing was sent.
    #[error("sign in to book a tutor")]
    NotSignedIn,
    /// The gateway answered but did not report an inserted id.
    #[error("booking was not stored")]
    NotInserted,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl Booking {
    /// Snapshot of `tutor` booked by `booker`.
    pub fn from_tutor(tutor: &Tutor, booker: &SessionUser) -> Self {
        Self {
            tutor_id: tutor.id.clone(),
            image: tutor.image.clone(),
            language: tutor.category.clone(),
            price: tutor.price,
            tutor_name: tutor.lecturer.user_name.clone(),
            tutor_email: tutor.lecturer.email.clone(),
            booker_email: booker.email.clone(),
            review: tutor.review_count,
        }
    }
}

/// Issue one booking write for `tutor` on behalf of `session`.
pub async fn book_tutor<G: Gateway>(
    gateway: &G,
    tutor: &Tutor,
    session: Option<&SessionUser>,
) -> Result<BookingReceipt, BookingError> {
    let Some(booker) = session else {
        return Err(BookingError::NotSignedIn);
    };

    let booking = Booking::from_tutor(tutor, booker);
    tracing::debug!(tutor_id = %booking.tutor_id, "booking tutor");
    let receipt = gateway.create_booking(&booking).await?;

    if receipt.inserted_id.is_none() {
        return Err(BookingError::NotInserted);
    }
    Ok(receipt)
}
