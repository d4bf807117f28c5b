//! Shared fakes for unit tests: a scripted HTTP transport and a channel
//! connector that records opens and closes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::channel::mpsc;

use crate::net::channel::{ChannelConnector, ChannelHandle};
use crate::net::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::net::types::UserProfile;
use crate::state::session::SessionStore;

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<ApiResponse, ApiError>>,
    requests: Vec<ApiRequest>,
}

/// Transport answering from a queue of scripted responses.
#[derive(Clone, Default)]
pub struct FakeTransport {
    script: Arc<Mutex<Script>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.script.lock().unwrap().responses.push_back(Ok(ApiResponse { status, body }));
        self
    }

    /// Queue the usual token reply.
    pub fn token(&self, token: &str) -> &Self {
        self.respond(200, serde_json::json!({ "token": token }))
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.script.lock().unwrap().responses.push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().requests.clone()
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request);
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Connector that hands out live handles and records every open/close.
#[derive(Default)]
pub struct RecordingConnector {
    opened: Mutex<Vec<ChannelHandle>>,
    closed: Mutex<Vec<uuid::Uuid>>,
    receivers: Mutex<Vec<mpsc::UnboundedReceiver<String>>>,
}

impl RecordingConnector {
    pub fn opened(&self) -> Vec<ChannelHandle> {
        self.opened.lock().unwrap().clone()
    }

    pub fn closed(&self) -> Vec<uuid::Uuid> {
        self.closed.lock().unwrap().clone()
    }
}

impl ChannelConnector for RecordingConnector {
    fn open(&self, _store: &SessionStore) -> ChannelHandle {
        let (handle, rx) = ChannelHandle::new("ws://localhost:3000/ws/");
        self.receivers.lock().unwrap().push(rx);
        self.opened.lock().unwrap().push(handle.clone());
        handle
    }

    fn close(&self, handle: ChannelHandle) {
        handle.close();
        self.closed.lock().unwrap().push(handle.id());
    }
}

pub fn recording_store() -> (SessionStore, Arc<RecordingConnector>) {
    let connector = Arc::new(RecordingConnector::default());
    (SessionStore::new(connector.clone()), connector)
}

pub fn alice() -> UserProfile {
    UserProfile::new("Alice", "a@x.com")
}
