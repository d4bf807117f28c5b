//! Notification channel: the live push connection tied to a signed-in session.
//!
//! The session store opens a channel when a user is set and closes it on
//! logout; nothing else owns one. In the browser the socket lives in a local
//! task (`spawn_local`) and the [`ChannelHandle`] is the only way to reach it.
//!
//! TRADE-OFFS
//! ==========
//! There is no reconnect loop. A dropped socket is logged and the session
//! carries on without push updates until the next login.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use futures::channel::mpsc;

use crate::state::session::SessionStore;
use crate::util::location::{PageOrigin, current_origin};

/// Opens and closes notification channels on behalf of the session store.
pub trait ChannelConnector: Send + Sync {
    /// Open a channel whose inbound session messages dispatch into `store`.
    fn open(&self, store: &SessionStore) -> ChannelHandle;
    fn close(&self, handle: ChannelHandle);
}

/// Handle to one open channel; outbound text goes through it.
#[derive(Clone, Debug)]
pub struct ChannelHandle {
    id: uuid::Uuid,
    endpoint: String,
    outbound: mpsc::UnboundedSender<String>,
}

impl PartialEq for ChannelHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl ChannelHandle {
    /// Create a handle plus the receiver its socket task drains.
    pub fn new(endpoint: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded();
        let handle = Self { id: uuid::Uuid::new_v4(), endpoint: endpoint.into(), outbound: tx };
        (handle, rx)
    }

    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queue a text message. Returns `false` if the channel is closed.
    pub fn send(&self, text: impl Into<String>) -> bool {
        self.outbound.unbounded_send(text.into()).is_ok()
    }

    /// Close the outbound queue; the socket task shuts down when it drains.
    pub fn close(&self) {
        self.outbound.close_channel();
    }

    pub fn is_closed(&self) -> bool {
        self.outbound.is_closed()
    }
}

/// Map the page origin onto the channel URL: `http:` pages use `ws://`,
/// every other scheme `wss://`; same host and port, fixed path.
pub fn channel_endpoint(origin: &PageOrigin, path: &str) -> String {
    let scheme = if origin.protocol == "http:" { "ws" } else { "wss" };
    format!("{scheme}://{}{path}", origin.host)
}

/// What happened to one inbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRoute {
    /// A recognized session mutation was dispatched.
    Session,
    /// Valid JSON with no handler; logged and dropped.
    Unknown,
    Invalid,
}

/// Route one inbound text message.
///
/// Messages carrying a `type` are offered to the session store as mutations.
/// Everything else is an extension point and is only logged for now.
pub fn route_message(text: &str, store: &SessionStore) -> MessageRoute {
    let message: serde_json::Value = match serde_json::from_str(text) {
        Ok(message) => message,
        Err(e) => {
            leptos::logging::warn!("notification channel: invalid message: {e}");
            return MessageRoute::Invalid;
        }
    };
    if message.get("type").is_some() && store.dispatch_message(&message) {
        return MessageRoute::Session;
    }
    leptos::logging::log!("notification channel: unknown message {message}");
    MessageRoute::Unknown
}

/// Connector backed by a browser WebSocket on the page's own host.
#[derive(Clone, Debug)]
pub struct BrowserChannel {
    path: String,
}

impl BrowserChannel {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl ChannelConnector for BrowserChannel {
    fn open(&self, store: &SessionStore) -> ChannelHandle {
        let endpoint = channel_endpoint(&current_origin(), &self.path);
        let (handle, outbound) = ChannelHandle::new(endpoint.clone());
        leptos::logging::log!("notification channel: opening {endpoint}");

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(run_channel(endpoint, outbound, store.clone()));
        #[cfg(not(feature = "csr"))]
        {
            // No socket outside the browser: the handle starts detached.
            let _ = (outbound, store);
        }

        handle
    }

    fn close(&self, handle: ChannelHandle) {
        leptos::logging::log!("notification channel: closing {}", handle.endpoint());
        handle.close();
    }
}

/// Socket task: forward outbound text, route inbound text, stop when either
/// side ends.
#[cfg(feature = "csr")]
async fn run_channel(endpoint: String, mut outbound: mpsc::UnboundedReceiver<String>, store: SessionStore) {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let socket = match WebSocket::open(&endpoint) {
        Ok(socket) => socket,
        Err(e) => {
            leptos::logging::warn!("notification channel: failed to open {endpoint}: {e}");
            return;
        }
    };
    let (mut write, mut read) = socket.split();

    let send_task = async {
        while let Some(text) = outbound.next().await {
            if write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
        let _ = write.close().await;
    };

    let recv_task = async {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    route_message(&text, &store);
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("notification channel: receive error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    leptos::logging::log!("notification channel: disconnected from {endpoint}");
}
