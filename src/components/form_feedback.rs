//! Form submission status and the alerts that render it.
//!
//! DESIGN
//! ======
//! Every form page tracks one [`FormStatus`]. Server field errors and
//! client-side checks arrive as the same [`ApiError::Validation`] and render
//! next to their input through [`FieldAlert`].

#[cfg(test)]
#[path = "form_feedback_test.rs"]
mod form_feedback_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::{ApiError, FieldErrors};

/// Lifecycle of one form submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Busy,
    Done,
    Failed { message: String, fields: FieldErrors },
}

impl FormStatus {
    /// Failure status for `err`, worded for the attempted `action`.
    pub fn failed(err: &ApiError, action: &str) -> Self {
        Self::Failed {
            message: err.describe(action),
            fields: err.field_errors().cloned().unwrap_or_default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Failed { message, .. } => Some(message.clone()),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<String> {
        match self {
            Self::Failed { fields, .. } => fields.get(name).map(str::to_owned),
            _ => None,
        }
    }
}

/// Run `task` unless a submission is already in flight, recording its
/// outcome in `status` and handing a success value to `on_success`.
pub fn run_submission<T, Fut>(
    status: RwSignal<FormStatus>,
    action: &'static str,
    task: Fut,
    on_success: impl FnOnce(T) + 'static,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    if status.get_untracked().is_busy() {
        return;
    }
    status.set(FormStatus::Busy);
    leptos::task::spawn_local(async move {
        match task.await {
            Ok(value) => {
                status.set(FormStatus::Done);
                on_success(value);
            }
            Err(err) => {
                leptos::logging::warn!("form submission failed ({action}): {err}");
                status.set(FormStatus::failed(&err, action));
            }
        }
    });
}

/// Form-level error banner.
#[component]
pub fn FormAlert(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <Show when=move || status.with(|s| s.message().is_some())>
            <div class="alert alert--danger" role="alert">
                {move || status.with(FormStatus::message).unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Error for a single input, shown above it.
#[component]
pub fn FieldAlert(status: RwSignal<FormStatus>, field: &'static str) -> impl IntoView {
    view! {
        <Show when=move || status.with(|s| s.field(field).is_some())>
            <div class="alert alert--danger alert--field">
                {move || status.with(|s| s.field(field)).unwrap_or_default()}
            </div>
        </Show>
    }
}
