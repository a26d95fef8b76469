use dioxus::prelude::*;

use ui::views::GoogleCallback;

use super::return_route;
use crate::Route;

/// Target of Google's consent redirect.
#[component]
pub fn GoogleRedirect() -> Element {
    let nav = use_navigator();

    rsx! {
        GoogleCallback {
            on_done: move |from: Option<String>| {
                let target = return_route(from.as_deref().unwrap_or_default());
                tracing::debug!("Google sign-in complete, returning to {target}");
                nav.replace(target);
            },
            on_failed: move |_| {
                nav.replace(Route::Login { from: String::new() });
            },
        }
    }
}
