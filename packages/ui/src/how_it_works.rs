use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendarCheck, FaMagnifyingGlass, FaUserPlus};
use dioxus_free_icons::Icon;

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { class: "how-it-works",
            h2 { class: "section-title", "How It Works" }
            div { class: "steps",
                div { class: "step",
                    Icon { icon: FaUserPlus, width: 32, height: 32 }
                    h3 { "1. Create an account" }
                    p { class: "muted", "Register with email or continue with Google." }
                }
                div { class: "step",
                    Icon { icon: FaMagnifyingGlass, width: 32, height: 32 }
                    h3 { "2. Find your tutor" }
                    p { class: "muted", "Browse by language and compare reviews and prices." }
                }
                div { class: "step",
                    Icon { icon: FaCalendarCheck, width: 32, height: 32 }
                    h3 { "3. Book a session" }
                    p { class: "muted", "Book from the tutor's page and start learning." }
                }
            }
        }
    }
}
