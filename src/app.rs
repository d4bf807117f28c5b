//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session store, the auth gateway and the configuration,
//! provides them as context, and starts session resolution. The router then
//! renders exactly one of three trees chosen by the [`ViewGate`] projection:
//! a loading placeholder, the signed-out routes or the signed-in routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{side_bar::SideBar, top_nav::TopNav};
use crate::config::ClientConfig;
use crate::net::api::{AuthGateway, Gateway, Resolution};
use crate::net::channel::BrowserChannel;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    activate::ActivatePage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage,
    not_found::NotFoundPage, password_reset::PasswordResetPage, register::RegisterPage, settings::SettingsPage,
};
use crate::state::session::{SessionStore, ViewGate};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = SessionStore::new(Arc::new(BrowserChannel::new(config.channel_path.clone())));
    let gateway: Gateway = AuthGateway::new(
        BrowserTransport::new(config.request_timeout_ms),
        config.api.clone(),
        store.clone(),
    );
    let title = config.project_title.clone();

    provide_context(config);
    provide_context(store.clone());
    provide_context(gateway.clone());

    leptos::task::spawn_local(start_session(gateway));

    let gate = store.select::<ViewGate>();

    view! {
        <Title text=title/>
        <Router>
            {move || match gate.get() {
                ViewGate::Loading => view! { <Loading/> }.into_any(),
                ViewGate::Unauthenticated => view! { <UnauthedRoutes/> }.into_any(),
                ViewGate::Authenticated => view! { <AuthedRoutes/> }.into_any(),
            }}
        </Router>
    }
}

/// Resolve the session, then load the API schema document.
async fn start_session(gateway: Gateway) {
    match gateway.resolve_session().await {
        Ok(Resolution::AlreadyStarted) => return,
        Ok(resolution) => leptos::logging::log!("session resolved: {resolution:?}"),
        Err(e) => leptos::logging::warn!("session resolution failed: {e}"),
    }
    if let Err(e) = gateway.fetch_remote_metadata().await {
        leptos::logging::warn!("remote metadata unavailable: {e}");
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}

/// Routes for a resolved, signed-out session. Unknown paths go home.
#[component]
fn UnauthedRoutes() -> impl IntoView {
    view! {
        <main class="layout layout--public">
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("activate"), ParamSegment("activation_key")) view=ActivatePage/>
                <Route path=StaticSegment("forgot_password") view=ForgotPasswordPage/>
                <Route path=(StaticSegment("password_reset"), ParamSegment("reset_key")) view=PasswordResetPage/>
            </Routes>
        </main>
    }
}

/// Routes for a signed-in session, wrapped in the navigation chrome.
#[component]
fn AuthedRoutes() -> impl IntoView {
    view! {
        <div class="layout layout--app">
            <TopNav/>
            <div class="layout__body">
                <SideBar/>
                <main class="layout__content">
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                        <Route path=(StaticSegment("activate"), ParamSegment("activation_key")) view=ActivatePage/>
                        <Route path=StaticSegment("login") view=|| view! { <Redirect path="/"/> }/>
                    </Routes>
                </main>
            </div>
        </div>
    }
}
