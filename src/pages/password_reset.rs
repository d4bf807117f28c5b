//! Complete a password reset from an emailed key.
//!
//! DESIGN
//! ======
//! The page first checks the key, which yields the account email shown
//! read-only in the form. A bad key ends in a terminal failure with a link
//! back to the forgot-password page. A mismatched password pair is reported
//! inline and sends nothing.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::central_container::CentralContainer;
use crate::components::form_feedback::{FieldAlert, FormAlert, FormStatus, run_submission};
use crate::net::api::Gateway;
use crate::net::error::ApiError;

const KEY_REJECTED: &str =
    "Sorry, there has been an issue resetting your password. Your token may have expired";

/// Where the reset flow stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetStage {
    CheckingKey,
    Ready { email: String },
    Failed(String),
}

impl ResetStage {
    pub fn after_key_check(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(email) => Self::Ready { email },
            Err(_) => Self::Failed(KEY_REJECTED.to_owned()),
        }
    }

    /// Stage for a finished check of `checked_key`, or `None` when the route
    /// has since moved on to another key and the result is stale.
    pub fn settle(current_key: &str, checked_key: &str, result: Result<String, ApiError>) -> Option<Self> {
        (current_key == checked_key).then(|| Self::after_key_check(result))
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Ready { email } => Some(email),
            _ => None,
        }
    }
}

#[component]
pub fn PasswordResetPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let params = use_params_map();
    let reset_key = Memo::new(move |_| params.read().get("reset_key").unwrap_or_default());
    let stage = RwSignal::new(ResetStage::CheckingKey);
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let check_gateway = gateway.clone();
    Effect::new(move |_| {
        let key = reset_key.get();
        stage.set(ResetStage::CheckingKey);
        let gateway = check_gateway.clone();
        leptos::task::spawn_local(async move {
            let result = gateway.check_reset_key(&key).await;
            if let Err(e) = &result {
                leptos::logging::warn!("could not check reset key: {e}");
            }
            // The page may have been left while the check was in flight.
            let Some(current) = reset_key.try_get_untracked() else {
                return;
            };
            if let Some(settled) = ResetStage::settle(&current, &key, result) {
                stage.set(settled);
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let key = reset_key.get_untracked();
        let (p1, p2) = (password1.get_untracked(), password2.get_untracked());
        run_submission(
            status,
            "reset your password",
            async move { gateway.complete_password_reset(&key, &p1, &p2).await },
            |()| {},
        );
    };

    let form = move || {
        view! {
            <form class="password-reset-form" on:submit=on_submit.clone()>
                <FormAlert status=status/>
                <label for="password-reset-email">"Email address"</label>
                <input
                    id="password-reset-email"
                    class="form-input"
                    type="email"
                    readonly=true
                    prop:value=move || stage.with(|s| s.email().map(str::to_owned)).unwrap_or_default()
                />
                <label for="password-reset-password1">"Password"</label>
                <FieldAlert status=status field="password1"/>
                <input
                    id="password-reset-password1"
                    class="form-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Password"
                    prop:value=move || password1.get()
                    on:input=move |ev| password1.set(event_target_value(&ev))
                />
                <label for="password-reset-password2">"Password Again"</label>
                <FieldAlert status=status field="password2"/>
                <input
                    id="password-reset-password2"
                    class="form-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Password Again"
                    prop:value=move || password2.get()
                    on:input=move |ev| password2.set(event_target_value(&ev))
                />
                <button class="form-button" type="submit" disabled=move || status.with(FormStatus::is_busy)>
                    "Update Password"
                </button>
            </form>
        }
    };

    view! {
        <CentralContainer>
            {move || {
                if status.with(FormStatus::is_done) {
                    return view! {
                        <div class="alert alert--info">
                            "Your password has been reset. You may now " <A href="/">"Login"</A> "."
                        </div>
                    }
                        .into_any();
                }
                match stage.get() {
                    ResetStage::CheckingKey => view! { <div class="text-center">"Loading..."</div> }.into_any(),
                    ResetStage::Failed(message) => {
                        view! {
                            <div class="alert alert--danger" role="alert">{message}</div>
                            <div class="form-links">
                                <A href="/forgot_password">"Forgot Password"</A>
                            </div>
                        }
                            .into_any()
                    }
                    ResetStage::Ready { .. } => form().into_any(),
                }
            }}
        </CentralContainer>
    }
}
