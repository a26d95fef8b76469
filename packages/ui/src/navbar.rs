use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGraduationCap;
use dioxus_free_icons::Icon;

use crate::auth::{use_session, LogoutButton};

/// Top bar. `children` are the route links; the right side follows the
/// session.
#[component]
pub fn Navbar(
    children: Element,
    on_home: EventHandler<()>,
    on_login: EventHandler<()>,
    on_register: EventHandler<()>,
) -> Element {
    let session = use_session();

    rsx! {
        header { class: "navbar",
            button { class: "brand", onclick: move |_| on_home.call(()),
                Icon { icon: FaGraduationCap, width: 22, height: 22 }
                span { "TutorHive" }
            }
            nav { class: "nav-links", {children} }
            div { class: "nav-account",
                if let Some(user) = session.current() {
                    if let Some(photo) = user.photo_url.as_ref().filter(|p| !p.is_empty()) {
                        img { class: "avatar", src: "{photo}", alt: "", title: "{user.display_name()}" }
                    }
                    span { class: "nav-user", "{user.display_name()}" }
                    LogoutButton {}
                } else {
                    button { class: "btn btn-ghost", onclick: move |_| on_login.call(()), "Login" }
                    button { class: "btn btn-primary", onclick: move |_| on_register.call(()), "Register" }
                }
            }
        }
    }
}
