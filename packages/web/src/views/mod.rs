mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod find_tutors;
pub use find_tutors::{FindTutors, FindTutorsByCategory};

mod tutor_details;
pub use tutor_details::TutorDetails;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod google_redirect;
pub use google_redirect::GoogleRedirect;

mod page_not_found;
pub use page_not_found::PageNotFound;

use crate::Route;

/// Where to go after signing in. `from` is an in-app path; anything else,
/// or a path back into the sign-in pages, lands on home.
pub(crate) fn return_route(from: &str) -> Route {
    let from = from.trim();
    if !from.starts_with('/') || from.starts_with("//") {
        return Route::Home {};
    }
    match from.parse::<Route>() {
        Ok(
            Route::Login { .. }
            | Route::Register {}
            | Route::GoogleRedirect {}
            | Route::PageNotFound { .. },
        )
        | Err(_) => Route::Home {},
        Ok(route) => route,
    }
}
