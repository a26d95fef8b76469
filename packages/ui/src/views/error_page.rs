use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

/// Fallback for routes that match nothing.
#[component]
pub fn ErrorPage(on_back: EventHandler<()>) -> Element {
    rsx! {
        section { class: "error-page",
            Icon { icon: FaTriangleExclamation, width: 48, height: 48 }
            h1 { "404" }
            h2 { "Page Not Found" }
            p { class: "muted", "The page you are looking for does not exist or has moved." }
            button { class: "btn btn-primary", onclick: move |_| on_back.call(()), "Go Back" }
        }
    }
}
