//! Language categories on the home page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaBook, FaBookOpen, FaChalkboardUser, FaComments, FaEarthAmericas, FaGlobe,
    FaGraduationCap, FaLanguage, FaMosque, FaPenNib, FaUserGraduate,
};
use dioxus_free_icons::Icon;
use domain::{Category, Gateway};

use crate::hooks::use_fetch;
use crate::services::use_gateway;
use crate::views::Loading;

const ICON_SIZE: u32 = 28;

/// Render the icon a category names. The gateway uses react-icons names
/// (`"FaLanguage"`, `"FaGlobeAmericas"`, ...); unknown names get a book.
pub fn category_icon(name: &str) -> Element {
    match name {
        "FaLanguage" => rsx! { Icon { icon: FaLanguage, width: ICON_SIZE, height: ICON_SIZE } },
        "FaGlobe" => rsx! { Icon { icon: FaGlobe, width: ICON_SIZE, height: ICON_SIZE } },
        "FaGlobeAmericas" | "FaEarthAmericas" => {
            rsx! { Icon { icon: FaEarthAmericas, width: ICON_SIZE, height: ICON_SIZE } }
        }
        "FaBook" => rsx! { Icon { icon: FaBook, width: ICON_SIZE, height: ICON_SIZE } },
        "FaComments" => rsx! { Icon { icon: FaComments, width: ICON_SIZE, height: ICON_SIZE } },
        "FaGraduationCap" => {
            rsx! { Icon { icon: FaGraduationCap, width: ICON_SIZE, height: ICON_SIZE } }
        }
        "FaChalkboardTeacher" | "FaChalkboardUser" => {
            rsx! { Icon { icon: FaChalkboardUser, width: ICON_SIZE, height: ICON_SIZE } }
        }
        "FaUserGraduate" => {
            rsx! { Icon { icon: FaUserGraduate, width: ICON_SIZE, height: ICON_SIZE } }
        }
        "FaMosque" => rsx! { Icon { icon: FaMosque, width: ICON_SIZE, height: ICON_SIZE } },
        "FaPenNib" | "FaPenFancy" => {
            rsx! { Icon { icon: FaPenNib, width: ICON_SIZE, height: ICON_SIZE } }
        }
        _ => rsx! { Icon { icon: FaBookOpen, width: ICON_SIZE, height: ICON_SIZE } },
    }
}

/// Fetch the categories on mount and show one card per category.
///
/// A failed fetch renders an empty grid; the failure is only logged.
#[component]
pub fn CategoryGrid(on_select: EventHandler<Category>) -> Element {
    let gateway = use_gateway();
    let categories = use_fetch(move || async move { gateway.list_categories().await });

    let state = categories.read();
    if state.is_loading() {
        return rsx! { Loading {} };
    }

    rsx! {
        section { class: "categories",
            h2 { class: "section-title", "Explore Languages" }
            p { class: "section-subtitle", "Pick a language and meet the tutors who teach it." }
            div { class: "category-grid",
                for category in state.items().iter() {
                    CategoryCard {
                        key: "{category.id}",
                        category: category.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryCard(category: Category, on_select: EventHandler<Category>) -> Element {
    let tutor_count = category.tutor_count_label();
    let selected = category.clone();

    rsx! {
        button {
            class: "category-card",
            onclick: move |_| on_select.call(selected.clone()),
            div { class: "category-icon", {category_icon(&category.icon_name)} }
            div { class: "category-body",
                h3 { "{category.title}" }
                p { class: "muted", "{category.description_or_default()}" }
                span { class: "badge", "{tutor_count} tutors" }
            }
            span { class: "category-arrow",
                Icon { icon: FaArrowRight, width: 14, height: 14 }
            }
        }
    }
}
