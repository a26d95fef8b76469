//! Session context and the sign-in buttons.
//!
//! The session lives in memory only: a reload or the Google redirect starts
//! signed out until the callback route completes.

use domain::{ActionState, SessionUser};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
use dioxus_free_icons::Icon;

use crate::services::use_identity;
use crate::toast::use_toasts;

/// Copyable handle on the signed-in user.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    user: Signal<Option<SessionUser>>,
}

impl Session {
    pub fn current(&self) -> Option<SessionUser> {
        self.user.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn sign_in(&self, user: SessionUser) {
        let mut signal = self.user;
        signal.set(Some(user));
    }

    pub fn sign_out(&self) {
        let mut signal = self.user;
        if let Some(user) = signal.write().take() {
            tracing::info!(email = %user.email, "signed out");
        };
    }
}

/// Get the current session. Reading it subscribes the caller to sign-in and
/// sign-out.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that holds the session for the whole app.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let user = use_signal(|| None::<SessionUser>);
    use_context_provider(|| Session { user });

    rsx! {
        {children}
    }
}

/// Redirect to Google's consent screen. `from` comes back in the callback's
/// `state` so the user lands where they started.
#[component]
pub fn GoogleLoginButton(
    #[props(default = "/".to_string())] from: String,
    #[props(default = "Continue with Google".to_string())] label: String,
) -> Element {
    let identity = use_identity();
    let toasts = use_toasts();
    let mut action = use_signal(ActionState::default);

    let onclick = move |_| {
        if !action.write().try_begin() {
            return;
        }
        match api::google_authorize_url(identity.config(), &from) {
            Ok(url) => {
                tracing::info!("redirecting to Google sign-in");
                redirect(&url);
                action.write().succeed();
            }
            Err(e) => {
                tracing::error!("Google sign-in unavailable: {e}");
                toasts.error("Google login failed.");
                action.write().fail();
            }
        }
    };

    rsx! {
        button {
            r#type: "button",
            class: "btn btn-outline btn-google",
            disabled: action().is_submitting(),
            onclick: onclick,
            Icon { icon: FaGoogle, width: 16, height: 16 }
            span { "{label}" }
        }
    }
}

#[component]
pub fn LogoutButton() -> Element {
    let session = use_session();
    let toasts = use_toasts();

    rsx! {
        button {
            class: "btn btn-ghost",
            onclick: move |_| {
                session.sign_out();
                toasts.success("Logged out");
            },
            "Logout"
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            tracing::error!("redirect failed: {e:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect(url: &str) {
    tracing::warn!("no browser to open {url}");
}
