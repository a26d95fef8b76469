//! Login page. `from` is the route that sent the user here.

use dioxus::prelude::*;

use ui::views::LoginForm;

use super::return_route;
use crate::Route;

#[component]
pub fn Login(from: String) -> Element {
    let nav = use_navigator();
    let target = from.clone();

    rsx! {
        LoginForm {
            from,
            on_success: move |_| {
                nav.replace(return_route(&target));
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
