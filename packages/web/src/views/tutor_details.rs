use dioxus::prelude::*;

use ui::views::TutorDetail;

use crate::Route;

#[component]
pub fn TutorDetails(id: String) -> Element {
    let nav = use_navigator();
    let here = Route::TutorDetails { id: id.clone() }.to_string();

    rsx! {
        TutorDetail {
            key: "{id}",
            id: id.clone(),
            on_sign_in_required: move |_| {
                nav.push(Route::Login { from: here.clone() });
            },
        }
    }
}
