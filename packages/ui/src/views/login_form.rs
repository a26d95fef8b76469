//! Email/password sign-in form.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaEyeSlash};
use dioxus_free_icons::Icon;
use domain::{auth, ActionState, LoginForm as Credentials, SessionUser};

use crate::auth::{use_session, GoogleLoginButton};
use crate::services::use_identity;
use crate::toast::use_toasts;
use crate::views::submitted_text;

/// `from` is the route to return to; it is passed through to Google sign-in.
/// `on_success` fires after the session is replaced.
#[component]
pub fn LoginForm(
    #[props(default = "/".to_string())] from: String,
    on_success: EventHandler<SessionUser>,
    on_register: EventHandler<()>,
) -> Element {
    let identity = use_identity();
    let session = use_session();
    let toasts = use_toasts();
    let mut show_password = use_signal(|| false);
    let mut action = use_signal(ActionState::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !action.write().try_begin() {
            return;
        }
        let form = Credentials {
            email: submitted_text(&evt, "email"),
            password: submitted_text(&evt, "password"),
        };
        let identity = identity.clone();
        spawn(async move {
            match auth::login(&identity, &form).await {
                Ok(user) => {
                    action.write().succeed();
                    session.sign_in(user.clone());
                    toasts.success("Login Successful!");
                    on_success.call(user);
                }
                Err(e) => {
                    tracing::warn!("sign-in failed: {e}");
                    action.write().fail();
                    toasts.warning("Incorrect information. Please try again.");
                }
            }
        });
    };

    let submitting = action().is_submitting();

    rsx! {
        div { class: "auth-card",
            h1 { "Welcome Back" }
            p { class: "muted", "Sign in to book your next lesson" }

            form { class: "auth-form", onsubmit: handle_login,
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "you@example.com",
                }

                label { r#for: "login-password", "Password" }
                div { class: "password-field",
                    input {
                        id: "login-password",
                        name: "password",
                        r#type: if show_password() { "text" } else { "password" },
                        required: true,
                        placeholder: "Your password",
                    }
                    PasswordToggle { visible: show_password(), on_toggle: move |_| show_password.toggle() }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Signing in..." } else { "Login" }
                }
            }

            div { class: "divider", span { "or" } }
            GoogleLoginButton { from }

            p { class: "auth-switch",
                "Don't have an account? "
                button { class: "link", onclick: move |_| on_register.call(()), "Register" }
            }
        }
    }
}

/// Eye icon that flips a password input between hidden and shown.
#[component]
pub fn PasswordToggle(visible: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "password-toggle",
            aria_label: if visible { "Hide password" } else { "Show password" },
            onclick: move |_| on_toggle.call(()),
            if visible {
                Icon { icon: FaEyeSlash, width: 16, height: 16 }
            } else {
                Icon { icon: FaEye, width: 16, height: 16 }
            }
        }
    }
}
