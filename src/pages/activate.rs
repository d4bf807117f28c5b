//! Account activation from an emailed key.
//!
//! The activation request runs once per key, when the page mounts or the
//! route key changes. Activation never signs the user in.

#[cfg(test)]
#[path = "activate_test.rs"]
mod activate_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::central_container::CentralContainer;
use crate::net::api::Gateway;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;

const ACTIVATION_FAILED: &str =
    "Sorry, there has been an issue activating your account. Your token may have expired";

/// Progress of one activation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivationStage {
    Activating,
    Activated,
    Failed(String),
}

impl ActivationStage {
    pub fn from_result(result: &Result<UserProfile, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Activated,
            Err(_) => Self::Failed(ACTIVATION_FAILED.to_owned()),
        }
    }
}

#[component]
pub fn ActivatePage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let params = use_params_map();
    let stage = RwSignal::new(ActivationStage::Activating);
    let started = StoredValue::new(None::<String>);

    Effect::new(move |_| {
        let key = params.read().get("activation_key").unwrap_or_default();
        if started.get_value().as_deref() == Some(key.as_str()) {
            return;
        }
        started.set_value(Some(key.clone()));
        stage.set(ActivationStage::Activating);

        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let result = gateway.activate_account(&key).await;
            if let Err(e) = &result {
                leptos::logging::error!("could not activate account: {e}");
            }
            stage.set(ActivationStage::from_result(&result));
        });
    });

    view! {
        <CentralContainer>
            {move || match stage.get() {
                ActivationStage::Activating => view! { <div class="text-center">"Activating ..."</div> }.into_any(),
                ActivationStage::Activated => {
                    view! {
                        <div class="alert alert--info">
                            "Your account has been activated. You may now " <A href="/">"Login"</A> "."
                        </div>
                    }
                        .into_any()
                }
                ActivationStage::Failed(message) => {
                    view! { <div class="alert alert--danger" role="alert">{message}</div> }.into_any()
                }
            }}
        </CentralContainer>
    }
}
