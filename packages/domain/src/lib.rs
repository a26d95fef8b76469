//! # Domain crate — records, rules and flows behind the TutorHive views
//!
//! Nothing in here knows about Dioxus. The `ui` crate renders what these
//! functions compute and calls the flows from its event handlers; the `api`
//! crate supplies HTTP implementations of [`Gateway`] and [`AuthClient`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Category, Tutor, Booking and SessionUser records with their wire names |
//! | [`gateway`] | The [`Gateway`] trait over the category/tutor/booking endpoints |
//! | [`auth`] | The [`AuthClient`] trait and the login / register / Google flows |
//! | [`booking`] | Building and submitting a booking |
//! | [`catalog`] | Directory filtering, scoping and headings |
//! | [`password`] | Registration password rules |
//! | [`load`] | `LoadState` and the cancellable fetch-on-mount task |
//! | [`action`] | The `Idle → Submitting → Done` submit gate |
//! | [`stats`] | Marketing counters and their count-up curve |
//! | [`config`] | `tutorhive.toml` configuration |

pub mod action;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod gateway;
pub mod load;
pub mod models;
pub mod password;
pub mod stats;

mod memory;
pub use memory::{AuthCall, MemoryAuth, MemoryGateway};

pub use action::ActionState;
pub use auth::{AuthClient, AuthError, LoginForm, RegisterError, RegisterForm};
pub use booking::{book_tutor, BookingError};
pub use config::AppConfig;
pub use gateway::{Gateway, GatewayError};
pub use load::{mount, LoadState, ViewTask};
pub use models::{Booking, BookingReceipt, Category, Lecturer, ProfileUpdate, SessionUser, Tutor};
pub use password::{validate_password, PasswordRule};
