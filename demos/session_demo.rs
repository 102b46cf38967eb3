//! Session context demonstration example
//!
//! This example demonstrates the shared session context, showing how a UI
//! root creates it, components subscribe, and setters broadcast changes.

use docdeck::logging::{init_logging, LoggingConfig};
use docdeck::{create_shared_session, DocumentState, DocumentType, SearchType, Settings};

fn main() {
    init_logging(&LoggingConfig {
        file_output: false,
        ..LoggingConfig::default()
    });

    println!("=== Docdeck Session Demo ===\n");

    // The UI root creates one shared session from settings
    let settings = Settings::default();
    let session = create_shared_session(&settings);
    println!("Session {} started at {}", session.id(), session.started_at());
    println!("Initial state:");
    println!("  database: {}", session.snapshot().database_status);
    println!("  api:      {} ({})", session.snapshot().api_url, session.snapshot().api_type);
    println!();

    // A component subscribes before any mutation
    let mut events = session.subscribe();
    println!("Status bar subscribed ({} subscriber)\n", session.subscriber_count());

    // A health poller reports in
    println!("Health poller reports database=ok, vpn=ok, queue=42");
    session.set_database_status("ok");
    session.set_vpn_server_status("ok");
    session.set_sqs_length(42);

    // The user narrows the document browser
    println!("User filters: youtube documents needing transcription, fuzzy search\n");
    session.set_selected_document_type(DocumentType::Youtube);
    session.set_selected_document_state(DocumentState::NeedTranscription);
    session.set_search_in_document("rust meetup");
    session.set_search_type(SearchType::Fuzzy);

    // The subscriber drains what it was told
    println!("Events seen by the status bar:");
    while let Ok(event) = events.try_recv() {
        println!("  {}", event.to_json().expect("serializable event"));
    }

    println!("\nFinal queue depth: {}", session.snapshot().sqs_length);
}
