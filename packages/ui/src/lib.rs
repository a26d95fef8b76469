//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`views`] | Pages: category grid, tutor directory and detail, sign-in forms, loading and 404 |
//! | `auth` | [`SessionProvider`], [`use_session`] and the Google / logout buttons |
//! | `services` | [`ApiProvider`] hands the HTTP clients to every view |
//! | [`toast`] | [`Toaster`] and [`use_toasts`] |
//! | `navbar`, `banner`, `stats_section`, `how_it_works` | Layout and home page sections |

use dioxus::prelude::*;

pub const TUTORHIVE_CSS: Asset = asset!("/assets/tutorhive.css");

mod hooks;
mod timer;

pub mod views;

mod auth;
pub use auth::{use_session, GoogleLoginButton, LogoutButton, Session, SessionProvider};

mod services;
pub use services::{use_gateway, use_identity, ApiProvider};

pub mod toast;
pub use toast::{use_toasts, Toaster, Toasts};

mod navbar;
pub use navbar::Navbar;

mod banner;
pub use banner::Banner;

mod stats_section;
pub use stats_section::StatsSection;

mod how_it_works;
pub use how_it_works::HowItWorks;
