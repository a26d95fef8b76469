//! # API crate — HTTP clients for the gateway and the identity provider
//!
//! The views never build requests themselves; they call the traits in the
//! `domain` crate and the `web` binary injects the implementations defined
//! here.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | [`HttpGateway`]: category, tutor and booking endpoints |
//! | [`identity`] | [`IdentityClient`]: password sign-in, sign-up, profile update, Google sign-in |
//! | [`google`] | Google OAuth consent URL and redirect parsing |
//! | [`config`] | Loading `tutorhive.toml` plus `TUTORHIVE_*` overrides |

pub mod config;
pub mod gateway;
pub mod google;
pub mod identity;

pub use config::load_config;
pub use gateway::HttpGateway;
pub use google::{google_authorize_url, parse_google_callback, GoogleCallback};
pub use identity::IdentityClient;
