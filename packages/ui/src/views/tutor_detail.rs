//! Single tutor page with the booking button.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaLanguage, FaStar};
use dioxus_free_icons::Icon;
use domain::{book_tutor, ActionState, BookingError, Gateway};

use crate::auth::use_session;
use crate::hooks::use_fetch;
use crate::services::use_gateway;
use crate::toast::use_toasts;
use crate::views::Loading;

/// Fetches the tutor once on mount. Render it with `key: "{id}"` so a new id
/// remounts the view and refetches.
///
/// An id the gateway cannot resolve keeps the spinner up; there is no
/// separate not-found state.
#[component]
pub fn TutorDetail(id: String, on_sign_in_required: EventHandler<()>) -> Element {
    let gateway = use_gateway();
    let session = use_session();
    let toasts = use_toasts();
    let mut action = use_signal(ActionState::default);

    let fetch_gateway = gateway.clone();
    let tutor = use_fetch(move || async move { fetch_gateway.get_tutor(&id).await });

    let Some(loaded) = tutor.read().loaded().cloned() else {
        return rsx! { Loading {} };
    };

    let booked = loaded.clone();
    let on_book = move |_| {
        if !action.write().try_begin() {
            return;
        }
        let gateway = gateway.clone();
        let tutor = booked.clone();
        spawn(async move {
            let user = session.current();
            match book_tutor(&gateway, &tutor, user.as_ref()).await {
                Ok(_) => {
                    action.write().succeed();
                    toasts.success("Tutor booked successfully!");
                }
                Err(BookingError::NotSignedIn) => {
                    action.write().fail();
                    toasts.warning("Please log in to book a tutor.");
                    on_sign_in_required.call(());
                }
                Err(e) => {
                    tracing::error!(tutor = %tutor.id, "booking failed: {e}");
                    action.write().fail();
                    toasts.error("Failed to book tutor.");
                }
            }
        });
    };

    let submitting = action().is_submitting();

    rsx! {
        section { class: "tutor-detail",
            div { class: "detail-media",
                img { src: "{loaded.image}", alt: "{loaded.lecturer.user_name}" }
            }
            div { class: "detail-body",
                div { class: "detail-lecturer",
                    img { class: "avatar avatar-lg", src: "{loaded.lecturer.photo}", alt: "" }
                    div {
                        h1 { "{loaded.lecturer.user_name}" }
                        p { class: "muted",
                            Icon { icon: FaEnvelope, width: 12, height: 12 }
                            " {loaded.lecturer.email}"
                        }
                    }
                }
                div { class: "detail-tags",
                    span { class: "badge",
                        Icon { icon: FaLanguage, width: 12, height: 12 }
                        " {loaded.category}"
                    }
                    span { class: "rating",
                        for star in 0..5 {
                            Icon { key: "{star}", icon: FaStar, width: 14, height: 14 }
                        }
                        " ({loaded.review_count} reviews)"
                    }
                }
                p { class: "detail-description", "{loaded.description_or_default()}" }
                div { class: "detail-footer",
                    div { class: "price",
                        span { class: "muted", "Price per session" }
                        strong { "BDT {loaded.price_label()}" }
                    }
                    button {
                        class: "btn btn-primary btn-lg",
                        disabled: submitting,
                        onclick: on_book,
                        if submitting { "Booking..." } else { "Book This Tutor" }
                    }
                }
            }
        }
    }
}
