//! Integration test for the shared session context

use docdeck::{
    create_shared_session, DocumentState, DocumentType, SearchType, SessionEvent, Settings,
};

#[test]
fn test_fresh_session_matches_documented_defaults() {
    let session = create_shared_session(&Settings::default());
    let state = session.snapshot();

    assert_eq!(state.database_status, "unknown");
    assert_eq!(state.vpn_server_status, "unknown");
    assert_eq!(state.sqs_length, 0);
    assert_eq!(state.api_key, None);
    assert_eq!(state.api_type, "AWS Serverless");
    assert_eq!(state.selected_document_type, DocumentType::Link);
    assert_eq!(state.selected_document_state, DocumentState::NeedManualReview);
    assert_eq!(state.search_in_document, "");
    assert_eq!(state.search_type, SearchType::Strict);
}

#[test]
fn test_status_panel_scenario() {
    // A status poller and the document browser share one session; each
    // mutation is visible to readers and announced to the subscriber.
    let session = create_shared_session(&Settings::default());
    let mut events = session.subscribe();

    session.set_database_status("ok");
    session.set_vpn_server_status("ok");
    session.set_sqs_length(42);

    let state = session.snapshot();
    assert_eq!(state.database_status, "ok");
    assert_eq!(state.vpn_server_status, "ok");
    assert_eq!(state.sqs_length, 42);

    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::DatabaseStatus {
            value: "ok".to_string()
        }
    );
    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::VpnServerStatus {
            value: "ok".to_string()
        }
    );
    assert_eq!(events.try_recv().unwrap(), SessionEvent::SqsLength { value: 42 });
}

#[test]
fn test_document_browser_scenario() {
    let session = create_shared_session(&Settings::default());

    session.set_selected_document_type(DocumentType::Youtube);
    session.set_selected_document_state(DocumentState::NeedTranscription);
    session.set_search_in_document("standup notes");
    session.set_search_type(SearchType::Fuzzy);

    // Filter changes leave the connection fields untouched
    let state = session.snapshot();
    assert_eq!(state.selected_document_type, DocumentType::Youtube);
    assert_eq!(state.selected_document_state, DocumentState::NeedTranscription);
    assert_eq!(state.search_in_document, "standup notes");
    assert_eq!(state.search_type, SearchType::Fuzzy);
    assert_eq!(state.database_status, "unknown");
    assert_eq!(state.api_type, "AWS Serverless");
}

#[test]
fn test_switching_api_backend() {
    let session = create_shared_session(&Settings::default());

    session.set_api_type("custom");
    session.set_api_url("http://localhost:8080/v1");
    session.set_api_key(Some("dev-key".to_string()));

    let state = session.snapshot();
    assert_eq!(state.api_type, "custom");
    assert_eq!(state.api_url, "http://localhost:8080/v1");
    assert_eq!(state.api_key, Some("dev-key".to_string()));

    // Back to the default backend; the key is cleared
    session.set_api_key(None);
    assert_eq!(session.snapshot().api_key, None);
}

#[tokio::test]
async fn test_async_subscriber_sees_events_in_order() {
    let session = create_shared_session(&Settings::default());
    let mut events = session.subscribe();

    let producer = std::sync::Arc::clone(&session);
    let writer = tokio::task::spawn_blocking(move || {
        for depth in [3u32, 2, 1, 0] {
            producer.set_sqs_length(depth);
        }
    });

    let mut seen = Vec::new();
    for _ in 0..4 {
        match events.recv().await.unwrap() {
            SessionEvent::SqsLength { value } => seen.push(value),
            other => panic!("unexpected event {}", other.name()),
        }
    }

    writer.await.unwrap();
    assert_eq!(seen, vec![3, 2, 1, 0]);
    assert_eq!(session.snapshot().sqs_length, 0);
}

#[test]
fn test_snapshot_event_seeds_late_view() {
    let session = create_shared_session(&Settings::default());

    // Mutations happen before the view attaches
    session.set_api_type("custom");
    session.set_sqs_length(9);

    let mut events = session.subscribe();
    session.emit_snapshot();

    match events.try_recv().unwrap() {
        SessionEvent::Snapshot { state } => {
            assert_eq!(state.api_type, "custom");
            assert_eq!(state.sqs_length, 9);
        }
        other => panic!("expected snapshot, got {}", other.name()),
    }
}
