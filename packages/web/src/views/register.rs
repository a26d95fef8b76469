use dioxus::prelude::*;

use ui::views::RegisterForm;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterForm {
            on_success: move |_| {
                nav.replace(Route::Home {});
            },
            on_login: move |_| {
                nav.push(Route::Login { from: String::new() });
            },
        }
    }
}
