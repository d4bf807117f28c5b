use super::*;
use crate::state::session::{ChannelOpen, CurrentUser};
use crate::test_support::recording_store;

#[test]
fn http_pages_use_plain_websocket() {
    let origin = PageOrigin::new("http:", "localhost:8000");
    assert_eq!(channel_endpoint(&origin, "/ws/"), "ws://localhost:8000/ws/");
}

#[test]
fn other_schemes_use_secure_websocket() {
    let origin = PageOrigin::new("https:", "example.com");
    assert_eq!(channel_endpoint(&origin, "/ws/"), "wss://example.com/ws/");

    let origin = PageOrigin::new("file:", "example.com:8443");
    assert_eq!(channel_endpoint(&origin, "/notify/"), "wss://example.com:8443/notify/");
}

#[test]
fn handle_send_fails_after_close() {
    let (handle, mut rx) = ChannelHandle::new("ws://h/ws/");
    assert!(handle.send("ping"));
    assert_eq!(rx.try_next().ok().flatten().as_deref(), Some("ping"));

    handle.close();
    assert!(handle.is_closed());
    assert!(!handle.send("late"));
}

#[test]
fn handles_compare_by_identity() {
    let (a, _rx_a) = ChannelHandle::new("ws://h/ws/");
    let (b, _rx_b) = ChannelHandle::new("ws://h/ws/");
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn route_message_dispatches_session_mutations() {
    let (store, _) = recording_store();
    let text = r#"{"type":"SET_USER","user":{"display_name":"Alice","email":"a@x.com"}}"#;
    assert_eq!(route_message(text, &store), MessageRoute::Session);
    assert!(store.project::<CurrentUser>().0.is_some());
    assert_eq!(store.project::<ChannelOpen>(), ChannelOpen(true));
}

#[test]
fn route_message_drops_unknown_and_invalid_messages() {
    let (store, _) = recording_store();
    let before = store.snapshot();
    assert_eq!(route_message(r#"{"SOME_MESSAGE":1}"#, &store), MessageRoute::Unknown);
    assert_eq!(route_message(r#"{"type":"PROJECT_UPDATED"}"#, &store), MessageRoute::Unknown);
    assert_eq!(route_message("not json", &store), MessageRoute::Invalid);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn browser_channel_outside_browser_yields_detached_handle() {
    #[cfg(not(feature = "csr"))]
    {
        let (store, _) = recording_store();
        let connector = BrowserChannel::new("/ws/");
        let handle = connector.open(&store);
        assert_eq!(handle.endpoint(), "ws://localhost:3000/ws/");
        assert!(handle.is_closed());
        connector.close(handle);
    }
}
