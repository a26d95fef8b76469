use dioxus::html::FormValue;
use dioxus::prelude::*;

mod loading;
pub use loading::Loading;

mod error_page;
pub use error_page::ErrorPage;

mod category_grid;
pub use category_grid::{category_icon, CategoryGrid};

mod tutor_directory;
pub use tutor_directory::TutorDirectory;

mod tutor_detail;
pub use tutor_detail::TutorDetail;

mod login_form;
pub use login_form::{LoginForm, PasswordToggle};

mod register_form;
pub use register_form::RegisterForm;

mod google_callback;
pub use google_callback::GoogleCallback;

/// Text of the named field in a submitted form; empty when the field is absent.
pub(crate) fn submitted_text(evt: &FormEvent, name: &str) -> String {
    match evt.get_first(name) {
        Some(FormValue::Text(value)) => value,
        _ => String::new(),
    }
}
