use dioxus::prelude::*;

use ui::{ApiProvider, SessionProvider, Toaster};
use views::{
    AppLayout, FindTutors, FindTutorsByCategory, GoogleRedirect, Home, Login, PageNotFound,
    Register, TutorDetails,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/find-tutors")]
        FindTutors {},
        #[route("/find-tutors/:category")]
        FindTutorsByCategory { category: String },
        #[route("/tutors/:id")]
        TutorDetails { id: String },
        #[route("/login?:from")]
        Login { from: String },
        #[route("/register")]
        Register {},
        #[route("/auth/google/callback")]
        GoogleRedirect {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(api::load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::TUTORHIVE_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider { config,
            SessionProvider {
                Toaster {
                    Router::<Route> {}
                }
            }
        }
    }
}
