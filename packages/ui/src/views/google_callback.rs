//! Completes Google sign-in after the consent redirect.

use std::rc::Rc;

use dioxus::prelude::*;
use domain::{auth, mount, AuthError, LoadState, SessionUser};

use crate::auth::use_session;
use crate::services::use_identity;
use crate::toast::use_toasts;
use crate::views::Loading;

/// Reads the token from the current URL, signs in with it, then calls
/// `on_done` with the `state` route that started the flow. Any failure calls
/// `on_failed` instead.
#[component]
pub fn GoogleCallback(on_done: EventHandler<Option<String>>, on_failed: EventHandler<()>) -> Element {
    let identity = use_identity();
    let session = use_session();
    let toasts = use_toasts();

    use_hook(move || {
        let fetch = async move {
            let callback = api::parse_google_callback(&current_href()?)?;
            let user = auth::google_login(&identity, &callback.access_token).await?;
            Ok::<(SessionUser, Option<String>), AuthError>((user, callback.state))
        };
        let (task, fut) = mount(fetch, move |outcome| match outcome {
            LoadState::Loaded((user, from)) => {
                session.sign_in(user);
                toasts.success("Google login successful!");
                on_done.call(from);
            }
            LoadState::Failed(_) => {
                toasts.error("Google login failed.");
                on_failed.call(());
            }
            LoadState::Loading => {}
        });
        spawn(fut);
        Rc::new(task)
    });

    rsx! {
        div { class: "callback",
            Loading {}
            p { class: "muted", "Finishing Google sign-in..." }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_href() -> Result<String, AuthError> {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .ok_or_else(|| AuthError::Decode("no window location".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn current_href() -> Result<String, AuthError> {
    Err(AuthError::Rejected(
        "Google sign-in needs a browser".to_string(),
    ))
}
