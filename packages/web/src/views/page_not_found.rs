use dioxus::prelude::*;

use ui::views::ErrorPage;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));

    rsx! {
        ErrorPage {
            on_back: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
