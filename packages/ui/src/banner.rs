use dioxus::prelude::*;

/// Hero section on the home page.
#[component]
pub fn Banner(on_find_tutors: EventHandler<()>) -> Element {
    rsx! {
        section { class: "banner",
            div { class: "banner-copy",
                h1 { "Learn a new language with ", span { class: "accent", "expert tutors" } }
                p {
                    "One-on-one lessons with native speakers and certified teachers. "
                    "Pick a language, find a tutor you like and book your first session."
                }
                button { class: "btn btn-primary btn-lg", onclick: move |_| on_find_tutors.call(()), "Find a Tutor" }
            }
        }
    }
}
