use dioxus::prelude::*;

/// Centered spinner shown while a fetch is in flight.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", role: "status",
            div { class: "spinner" }
            span { class: "sr-only", "Loading..." }
        }
    }
}
