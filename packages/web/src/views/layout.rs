use dioxus::prelude::*;

use ui::Navbar;

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            Navbar {
                on_home: move |_| {
                    nav.push(Route::Home {});
                },
                on_login: move |_| {
                    nav.push(Route::Login { from: String::new() });
                },
                on_register: move |_| {
                    nav.push(Route::Register {});
                },
                Link { to: Route::Home {}, active_class: "active", "Home" }
                Link { to: Route::FindTutors {}, active_class: "active", "Find Tutors" }
            }
            main {
                Outlet::<Route> {}
            }
            footer { class: "footer", "© TutorHive. Learn any language, one lesson at a time." }
        }
    }
}
