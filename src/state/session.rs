//! Session state: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth gateway is the only writer (through [`SessionStore::dispatch`]);
//! pages and the router gate are readers through typed projections. The
//! notification channel is opened and closed here, as an effect of the
//! transition, so "channel open iff authenticated" holds after every dispatch.
//!
//! DESIGN
//! ======
//! `reduce` is a plain function over `&mut SessionState` that returns the
//! channel effects a transition demands; `dispatch` runs both inside one
//! signal update so subscribers never observe a user without a channel.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use serde::Deserialize;

use crate::net::channel::{ChannelConnector, ChannelHandle};
use crate::net::types::UserProfile;

/// Everything the client knows about the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Whether initial session resolution has finished.
    pub loaded: bool,
    pub user: Option<UserProfile>,
    /// Anti-forgery token reported alongside the session.
    pub token: Option<String>,
    pub logout_url: Option<String>,
    pub channel: Option<ChannelHandle>,
    /// Server-advertised metadata (the API schema document).
    pub remote_metadata: Option<serde_json::Value>,
}

/// The closed set of session mutations.
///
/// The serde form (`{"type": "SET_USER", ...}`) is what the notification
/// channel pushes; in-process callers construct variants directly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionAction {
    SetUser {
        user: UserProfile,
        #[serde(default)]
        logout_url: Option<String>,
        #[serde(default)]
        token: Option<String>,
    },
    /// Resolution finished without an active session.
    SetLoaded,
    SetLoggedOut,
    #[serde(rename = "SET_OPENAPI")]
    SetRemoteMetadata { data: serde_json::Value },
}

impl SessionAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetUser { .. } => "SET_USER",
            Self::SetLoaded => "SET_LOADED",
            Self::SetLoggedOut => "SET_LOGGED_OUT",
            Self::SetRemoteMetadata { .. } => "SET_OPENAPI",
        }
    }
}

/// Side effects a transition asks the store to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEffect {
    OpenChannel,
    CloseChannel(ChannelHandle),
}

/// Apply `action` to `state` and return the channel effects it requires.
///
/// `SetUser` on an already-authenticated session keeps the open channel, so
/// refreshing the profile does not reconnect.
pub fn reduce(state: &mut SessionState, action: SessionAction) -> Vec<SessionEffect> {
    match action {
        SessionAction::SetUser { user, logout_url, token } => {
            state.user = Some(user);
            state.logout_url = logout_url;
            state.token = token;
            state.loaded = true;
            if state.channel.is_none() { vec![SessionEffect::OpenChannel] } else { Vec::new() }
        }
        SessionAction::SetLoaded => {
            state.loaded = true;
            Vec::new()
        }
        SessionAction::SetLoggedOut => {
            let channel = state.channel.take();
            *state = SessionState { loaded: true, ..SessionState::default() };
            channel.into_iter().map(SessionEffect::CloseChannel).collect()
        }
        SessionAction::SetRemoteMetadata { data } => {
            state.remote_metadata = Some(data);
            Vec::new()
        }
    }
}

/// Explicitly constructed session store, shared through Leptos context.
///
/// Cloning is cheap; clones share the same state and connector.
#[derive(Clone)]
pub struct SessionStore {
    state: ArcRwSignal<SessionState>,
    connector: Arc<dyn ChannelConnector>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state.get_untracked())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(connector: Arc<dyn ChannelConnector>) -> Self {
        Self { state: ArcRwSignal::new(SessionState::default()), connector }
    }

    /// Apply one mutation, then open or close the notification channel as the
    /// transition demands. Mutations apply in call order.
    ///
    /// Connectors are invoked while the state is being written and must not
    /// read the store synchronously from `open`/`close`.
    pub fn dispatch(&self, action: SessionAction) {
        leptos::logging::log!("session: {}", action.kind());
        self.state.update(|state| {
            for effect in reduce(state, action) {
                match effect {
                    SessionEffect::OpenChannel => state.channel = Some(self.connector.open(self)),
                    SessionEffect::CloseChannel(handle) => self.connector.close(handle),
                }
            }
        });
    }

    /// Dispatch a JSON-encoded mutation, as pushed over the notification
    /// channel. Unrecognized kinds are logged and leave the state unchanged.
    ///
    /// Returns `true` if a mutation was applied.
    pub fn dispatch_message(&self, message: &serde_json::Value) -> bool {
        match SessionAction::deserialize(message) {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(e) => {
                let kind = message.get("type").and_then(serde_json::Value::as_str).unwrap_or("<missing>");
                leptos::logging::warn!("session: ignoring unrecognized mutation {kind}: {e}");
                false
            }
        }
    }

    /// Current value of a projection, without subscribing.
    pub fn project<P: SessionProjection>(&self) -> P {
        self.state.with_untracked(P::from_state)
    }

    /// Memoized reactive projection; readers re-run only when the slice changes.
    pub fn select<P: SessionProjection>(&self) -> Memo<P> {
        let state = self.state.clone();
        Memo::new(move |_| state.with(P::from_state))
    }

    /// Full state snapshot, without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }
}

/// A read-only slice of [`SessionState`].
pub trait SessionProjection: Clone + PartialEq + Send + Sync + 'static {
    fn from_state(state: &SessionState) -> Self;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loaded(pub bool);

impl SessionProjection for Loaded {
    fn from_state(state: &SessionState) -> Self {
        Self(state.loaded)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser(pub Option<UserProfile>);

impl SessionProjection for CurrentUser {
    fn from_state(state: &SessionState) -> Self {
        Self(state.user.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrfToken(pub Option<String>);

impl SessionProjection for CsrfToken {
    fn from_state(state: &SessionState) -> Self {
        Self(state.token.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutUrl(pub Option<String>);

impl SessionProjection for LogoutUrl {
    fn from_state(state: &SessionState) -> Self {
        Self(state.logout_url.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelOpen(pub bool);

impl SessionProjection for ChannelOpen {
    fn from_state(state: &SessionState) -> Self {
        Self(state.channel.is_some())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoteMetadata(pub Option<serde_json::Value>);

impl SessionProjection for RemoteMetadata {
    fn from_state(state: &SessionState) -> Self {
        Self(state.remote_metadata.clone())
    }
}

/// Which view tree the router renders. Exactly one applies at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewGate {
    Loading,
    Unauthenticated,
    Authenticated,
}

impl SessionProjection for ViewGate {
    fn from_state(state: &SessionState) -> Self {
        match (state.loaded, state.user.is_some()) {
            (false, _) => Self::Loading,
            (true, false) => Self::Unauthenticated,
            (true, true) => Self::Authenticated,
        }
    }
}
