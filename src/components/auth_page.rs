//! Auth Page Component
//!
//! Tri-mode login / register / forgot-password form. Validation runs fully
//! client-side and reports every violated field at once before anything is
//! sent.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session;

const MIN_PASSWORD_LEN: usize = 6;
const MIN_USERNAME_LEN: usize = 3;

/// How long the forgot-password confirmation stays up before the form
/// reverts to login.
const FORGOT_REVERT_MS: u32 = 3_000;

const REGISTER_NOTICE: &str = "Account created successfully! Please log in.";
const FORGOT_NOTICE: &str = "Password reset email sent! Check your inbox.";

/// Which endpoint a submit goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
    Forgot,
}

/// Transient input buffers. Cleared on mode switch and submit success,
/// preserved on failure for correction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field-scoped validation results. All fields are reported simultaneously.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Validate a draft for the given mode. Pure; does not touch the network.
fn validate(mode: AuthMode, draft: &AuthDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(&draft.email) {
        errors.email = Some("Please enter a valid email");
    }

    if mode != AuthMode::Forgot {
        if draft.password.is_empty() {
            errors.password = Some("Password is required");
        } else if draft.password.chars().count() < MIN_PASSWORD_LEN {
            errors.password = Some("Password must be at least 6 characters");
        }
    }

    if mode == AuthMode::Register {
        if draft.username.is_empty() {
            errors.username = Some("Username is required");
        } else if draft.username.chars().count() < MIN_USERNAME_LEN {
            errors.username = Some("Username must be at least 3 characters");
        }

        if draft.confirm_password.is_empty() {
            errors.confirm_password = Some("Please confirm your password");
        } else if draft.confirm_password != draft.password {
            errors.confirm_password = Some("Passwords do not match");
        }
    }

    errors
}

/// `local@domain.tld` shape, nothing more. The server does the real check.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let sound = |part: &str| {
        !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@')
    };
    sound(local) && sound(host) && sound(tld)
}

fn field_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() {
        "field-input invalid"
    } else {
        "field-input"
    }
}

/// Login / register / forgot-password entry form
#[component]
pub fn AuthPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);
    let draft = RwSignal::new(AuthDraft::default());
    let errors = RwSignal::new(FieldErrors::default());
    let submit_error: RwSignal<Option<String>> = RwSignal::new(None);
    let notice: RwSignal<Option<&'static str>> = RwSignal::new(None);
    let loading = RwSignal::new(false);
    let remember_me = RwSignal::new(false);

    // Switching modes drops every draft field and message unconditionally.
    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        draft.set(AuthDraft::default());
        errors.set(FieldErrors::default());
        submit_error.set(None);
        notice.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current_mode = mode.get();
        let d = draft.get();

        let field_errors = validate(current_mode, &d);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        submit_error.set(None);
        notice.set(None);
        loading.set(true);
        let remember = remember_me.get();

        spawn_local(async move {
            let result = match current_mode {
                AuthMode::Login => api::auth::login(&d.email, &d.password, remember).await,
                AuthMode::Register => {
                    api::auth::register(&d.username, &d.email, &d.password).await
                }
                AuthMode::Forgot => api::auth::forgot_password(&d.email).await,
            };
            loading.set(false);

            match result {
                Ok(()) => match current_mode {
                    AuthMode::Login => session::redirect_to_entry(),
                    AuthMode::Register => {
                        // Back to login, keeping the email for convenience.
                        mode.set(AuthMode::Login);
                        draft.set(AuthDraft {
                            email: d.email,
                            ..AuthDraft::default()
                        });
                        notice.set(Some(REGISTER_NOTICE));
                    }
                    AuthMode::Forgot => {
                        notice.set(Some(FORGOT_NOTICE));
                        TimeoutFuture::new(FORGOT_REVERT_MS).await;
                        mode.set(AuthMode::Login);
                        notice.set(None);
                    }
                },
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[AUTH] {:?} failed: {:?}", current_mode, err).into(),
                    );
                    submit_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Task Tracker"</h1>
                <p class="auth-subtitle">
                    {move || match mode.get() {
                        AuthMode::Forgot => "Reset your password",
                        AuthMode::Login => "Welcome back! Please sign in",
                        AuthMode::Register => "Create your account",
                    }}
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <div class="field">
                            <label class="field-label">"Username"</label>
                            <input
                                type="text"
                                placeholder="Enter your username"
                                class=move || field_class(errors.with(|e| e.username))
                                prop:value=move || draft.with(|d| d.username.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.username = value);
                                    errors.update(|e| e.username = None);
                                }
                            />
                            {move || errors.with(|e| e.username).map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </Show>

                    <div class="field">
                        <label class="field-label">"Email Address"</label>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class=move || field_class(errors.with(|e| e.email))
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.email = value);
                                errors.update(|e| e.email = None);
                            }
                        />
                        {move || errors.with(|e| e.email).map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}
                    </div>

                    <Show when=move || mode.get() != AuthMode::Forgot>
                        <div class="field">
                            <label class="field-label">"Password"</label>
                            <input
                                type="password"
                                placeholder="Enter your password"
                                class=move || field_class(errors.with(|e| e.password))
                                prop:value=move || draft.with(|d| d.password.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.password = value);
                                    errors.update(|e| e.password = None);
                                }
                            />
                            {move || errors.with(|e| e.password).map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </Show>

                    <Show when=move || mode.get() == AuthMode::Register>
                        <div class="field">
                            <label class="field-label">"Confirm Password"</label>
                            <input
                                type="password"
                                placeholder="Confirm your password"
                                class=move || field_class(errors.with(|e| e.confirm_password))
                                prop:value=move || draft.with(|d| d.confirm_password.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.confirm_password = value);
                                    errors.update(|e| e.confirm_password = None);
                                }
                            />
                            {move || errors.with(|e| e.confirm_password).map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </Show>

                    <Show when=move || mode.get() == AuthMode::Login>
                        <div class="remember-row">
                            <label class="remember-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || remember_me.get()
                                    on:change=move |ev| remember_me.set(event_target_checked(&ev))
                                />
                                <span>"Remember me"</span>
                            </label>
                            <button
                                type="button"
                                class="link-btn"
                                on:click=move |_| switch_mode(AuthMode::Forgot)
                            >
                                "Forgot password?"
                            </button>
                        </div>
                    </Show>

                    {move || submit_error.get().map(|msg| view! {
                        <div class="banner banner-error"><p>{msg}</p></div>
                    })}
                    {move || notice.get().map(|msg| view! {
                        <div class="banner banner-success"><p>{msg}</p></div>
                    })}

                    <button type="submit" class="submit-btn" disabled=move || loading.get()>
                        {move || if loading.get() {
                            "Processing..."
                        } else {
                            match mode.get() {
                                AuthMode::Login => "Sign In",
                                AuthMode::Register => "Create Account",
                                AuthMode::Forgot => "Send Reset Email",
                            }
                        }}
                    </button>
                </form>

                <Show when=move || mode.get() != AuthMode::Forgot>
                    <p class="mode-switch">
                        {move || if mode.get() == AuthMode::Login {
                            "Don't have an account? "
                        } else {
                            "Already have an account? "
                        }}
                        <button
                            type="button"
                            class="link-btn"
                            on:click=move |_| {
                                let next = if mode.get() == AuthMode::Login {
                                    AuthMode::Register
                                } else {
                                    AuthMode::Login
                                };
                                switch_mode(next);
                            }
                        >
                            {move || if mode.get() == AuthMode::Login { "Sign up" } else { "Sign in" }}
                        </button>
                    </p>
                </Show>
                <Show when=move || mode.get() == AuthMode::Forgot>
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| switch_mode(AuthMode::Login)
                    >
                        "← Back to login"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_draft() -> AuthDraft {
        AuthDraft {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "lovelace".to_string(),
            confirm_password: "lovelace".to_string(),
        }
    }

    #[test]
    fn valid_login_draft_passes() {
        let draft = AuthDraft {
            email: "ada@example.com".to_string(),
            password: "lovelace".to_string(),
            ..AuthDraft::default()
        };
        assert!(validate(AuthMode::Login, &draft).is_empty());
    }

    #[test]
    fn login_rejects_short_password() {
        let draft = AuthDraft {
            email: "ada@example.com".to_string(),
            password: "12345".to_string(),
            ..AuthDraft::default()
        };
        let errors = validate(AuthMode::Login, &draft);
        assert_eq!(errors.password, Some("Password must be at least 6 characters"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn mismatched_confirmation_is_scoped_to_that_field() {
        let draft = AuthDraft {
            confirm_password: "different".to_string(),
            ..register_draft()
        };
        let errors = validate(AuthMode::Register, &draft);
        assert_eq!(errors.confirm_password, Some("Passwords do not match"));
        assert!(errors.username.is_none());
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
    }

    #[test]
    fn register_reports_all_violations_at_once() {
        let errors = validate(AuthMode::Register, &AuthDraft::default());
        assert_eq!(errors.username, Some("Username is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
        assert_eq!(errors.confirm_password, Some("Please confirm your password"));
    }

    #[test]
    fn register_rejects_short_username() {
        let draft = AuthDraft {
            username: "ab".to_string(),
            ..register_draft()
        };
        let errors = validate(AuthMode::Register, &draft);
        assert_eq!(errors.username, Some("Username must be at least 3 characters"));
    }

    #[test]
    fn forgot_only_needs_an_email() {
        let draft = AuthDraft {
            email: "ada@example.com".to_string(),
            ..AuthDraft::default()
        };
        assert!(validate(AuthMode::Forgot, &draft).is_empty());

        let errors = validate(AuthMode::Forgot, &AuthDraft::default());
        assert_eq!(errors.email, Some("Email is required"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("no@dot"));
        assert!(!is_valid_email("@missing.local"));
        assert!(!is_valid_email("trailing@dot."));
        assert!(!is_valid_email("two@@at.com"));
        assert!(!is_valid_email("spa ce@mail.com"));
    }
}
