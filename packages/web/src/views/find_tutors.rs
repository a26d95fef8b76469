use dioxus::prelude::*;

use ui::views::TutorDirectory;

use crate::Route;

#[component]
pub fn FindTutors() -> Element {
    let nav = use_navigator();

    rsx! {
        TutorDirectory {
            on_contact: move |id: String| {
                nav.push(Route::TutorDetails { id });
            },
        }
    }
}

/// Directory scoped to one language. Keyed on the category so moving between
/// categories refetches.
#[component]
pub fn FindTutorsByCategory(category: String) -> Element {
    let nav = use_navigator();

    rsx! {
        TutorDirectory {
            key: "{category}",
            category: category.clone(),
            on_contact: move |id: String| {
                nav.push(Route::TutorDetails { id });
            },
        }
    }
}
