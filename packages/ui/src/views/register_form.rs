//! Account creation form.

use dioxus::prelude::*;
use domain::password::MIN_PASSWORD_LEN;
use domain::{auth, ActionState, RegisterForm as Registration, SessionUser};

use crate::auth::{use_session, GoogleLoginButton};
use crate::services::use_identity;
use crate::toast::use_toasts;
use crate::views::{submitted_text, PasswordToggle};

/// Validates the password before any network call. Each violated rule gets
/// its own error toast.
#[component]
pub fn RegisterForm(on_success: EventHandler<SessionUser>, on_login: EventHandler<()>) -> Element {
    let identity = use_identity();
    let session = use_session();
    let toasts = use_toasts();
    let mut show_password = use_signal(|| false);
    let mut action = use_signal(ActionState::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if !action.write().try_begin() {
            return;
        }
        let form = Registration {
            name: submitted_text(&evt, "name"),
            photo_url: submitted_text(&evt, "photo"),
            email: submitted_text(&evt, "email"),
            password: submitted_text(&evt, "password"),
        };
        let identity = identity.clone();
        spawn(async move {
            match auth::register(&identity, &form).await {
                Ok(user) => {
                    action.write().succeed();
                    session.sign_in(user.clone());
                    toasts.success("Registration successful! Welcome aboard!");
                    on_success.call(user);
                }
                Err(e) => {
                    tracing::warn!("registration failed: {e}");
                    action.write().fail();
                    for message in e.messages() {
                        toasts.error(message);
                    }
                }
            }
        });
    };

    let submitting = action().is_submitting();
    let password_hint = format!(
        "At least {MIN_PASSWORD_LEN} characters with an uppercase letter, a lowercase letter and a number"
    );

    rsx! {
        div { class: "auth-card",
            h1 { "Create an Account" }
            p { class: "muted", "Join TutorHive and start learning today" }

            form { class: "auth-form", onsubmit: handle_register,
                label { r#for: "register-name", "Name" }
                input {
                    id: "register-name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    placeholder: "Your full name",
                }

                label { r#for: "register-photo", "Photo URL" }
                input {
                    id: "register-photo",
                    name: "photo",
                    r#type: "url",
                    placeholder: "https://...",
                }

                label { r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "you@example.com",
                }

                label { r#for: "register-password", "Password" }
                div { class: "password-field",
                    input {
                        id: "register-password",
                        name: "password",
                        r#type: if show_password() { "text" } else { "password" },
                        required: true,
                        placeholder: "Create a password",
                    }
                    PasswordToggle { visible: show_password(), on_toggle: move |_| show_password.toggle() }
                }
                small { class: "muted", "{password_hint}" }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Creating account..." } else { "Register" }
                }
            }

            div { class: "divider", span { "or" } }
            GoogleLoginButton { label: "Sign up with Google".to_string() }

            p { class: "auth-switch",
                "Already have an account? "
                button { class: "link", onclick: move |_| on_login.call(()), "Login" }
            }
        }
    }
}
