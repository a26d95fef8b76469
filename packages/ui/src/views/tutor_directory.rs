//! Tutor directory with category search.
//!
//! All tutors are fetched once on mount and scoped to the route's category;
//! the search box then narrows that list locally without refetching.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaStar};
use dioxus_free_icons::Icon;
use domain::catalog::{directory_heading, filter_tutors, result_count_label, scope_to_category};
use domain::{Gateway, Tutor};

use crate::hooks::use_fetch;
use crate::services::use_gateway;
use crate::views::Loading;

#[component]
pub fn TutorDirectory(
    category: Option<String>,
    on_contact: EventHandler<String>,
) -> Element {
    let gateway = use_gateway();
    let scope = category.clone();
    let tutors = use_fetch(move || async move {
        let tutors = gateway.list_tutors().await?;
        Ok::<_, domain::GatewayError>(scope_to_category(tutors, scope.as_deref()))
    });
    let mut query = use_signal(String::new);

    let heading = directory_heading(category.as_deref());
    let state = tutors.read();
    let query_text = query();
    let shown = filter_tutors(state.items(), &query_text);

    rsx! {
        section { class: "directory",
            h1 { class: "section-title", "{heading}" }
            div { class: "search",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                input {
                    r#type: "search",
                    placeholder: "Search by language...",
                    value: "{query_text}",
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
            }
            if state.is_loading() {
                Loading {}
            } else if shown.is_empty() {
                div { class: "empty-state",
                    h3 { "No tutors found" }
                    p { class: "muted", "Try another language or clear the search." }
                }
            } else {
                p { class: "muted", "{result_count_label(shown.len())}" }
                div { class: "tutor-grid",
                    for tutor in shown.iter() {
                        TutorCard { key: "{tutor.id}", tutor: (*tutor).clone(), on_contact }
                    }
                }
            }
        }
    }
}

#[component]
fn TutorCard(tutor: Tutor, on_contact: EventHandler<String>) -> Element {
    let id = tutor.id.clone();

    rsx! {
        article { class: "tutor-card",
            img { class: "tutor-image", src: "{tutor.image}", alt: "{tutor.lecturer.user_name}" }
            div { class: "tutor-body",
                div { class: "tutor-header",
                    img { class: "avatar", src: "{tutor.lecturer.photo}", alt: "" }
                    h3 { "{tutor.lecturer.user_name}" }
                    span { class: "badge", "{tutor.category}" }
                }
                p { class: "muted clamp", "{tutor.description_or_default()}" }
                div { class: "tutor-meta",
                    span { class: "rating",
                        Icon { icon: FaStar, width: 14, height: 14 }
                        " {tutor.review_count} reviews"
                    }
                    span { class: "price", "BDT {tutor.price_label()}" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_contact.call(id.clone()),
                    "Contact Tutor"
                }
            }
        }
    }
}
