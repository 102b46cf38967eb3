//! Session Context
//!
//! The shared state container handed to the UI component tree. One
//! `SessionContext` is created at the UI root (its lifetime is the UI's
//! lifetime) and cloned handles are passed down to components; nothing here
//! is a process-wide singleton.
//!
//! Each setter replaces its field unconditionally - no validation, no
//! rejection path - and then broadcasts the matching [`SessionEvent`] so
//! subscribed components re-render. Last write wins; there is no merging and
//! no cross-field atomicity.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::Settings;

use super::events::SessionEvent;
use super::model::{DocumentState, DocumentType, SearchType, SessionState};

/// Broadcast channel capacity for session events
///
/// A UI that falls this many events behind receives `RecvError::Lagged` and
/// should re-seed from a snapshot.
const EVENT_CAPACITY: usize = 64;

/// Shared handle to the session context
pub type SharedSession = Arc<SessionContext>;

/// Create a new shared session context seeded from settings
pub fn create_shared_session(settings: &Settings) -> SharedSession {
    Arc::new(SessionContext::new(settings))
}

/// Container for the shared UI session state
pub struct SessionContext {
    /// Unique ID for this UI session
    id: Uuid,

    /// When this session was created
    started_at: DateTime<Utc>,

    /// The mutable session record
    state: RwLock<SessionState>,

    /// Change broadcast to subscribed UI components
    events: broadcast::Sender<SessionEvent>,
}

impl SessionContext {
    /// Create a new session context
    ///
    /// Every field takes its documented default; the API endpoint fields are
    /// seeded from `settings`.
    pub fn new(settings: &Settings) -> Self {
        let id = Uuid::new_v4();
        let state = SessionState {
            api_url: settings.api_url.clone(),
            api_type: settings.api_type.clone(),
            ..SessionState::default()
        };
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        tracing::info!(
            session_id = %id,
            api_url = %state.api_url,
            api_type = %state.api_type,
            "Session context created"
        );

        Self {
            id,
            started_at: Utc::now(),
            state: RwLock::new(state),
            events,
        }
    }

    /// Unique ID of this session
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When this session was created
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// How long this session has been alive
    pub fn uptime(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }

    /// Current state as an owned copy
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Subscribe to session change events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    /// Broadcast a full state snapshot
    ///
    /// Called by adapters after attaching a new view so it starts from the
    /// current state instead of the defaults.
    pub fn emit_snapshot(&self) {
        self.emit(SessionEvent::Snapshot {
            state: self.snapshot(),
        });
    }

    // ========================================================================
    // Field setters
    // ========================================================================

    pub fn set_database_status(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.write().database_status = value.clone();
        tracing::debug!(%value, "database status updated");
        self.emit(SessionEvent::DatabaseStatus { value });
    }

    pub fn set_vpn_server_status(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.write().vpn_server_status = value.clone();
        tracing::debug!(%value, "vpn server status updated");
        self.emit(SessionEvent::VpnServerStatus { value });
    }

    pub fn set_sqs_length(&self, value: u32) {
        self.state.write().sqs_length = value;
        tracing::debug!(value, "queue length updated");
        self.emit(SessionEvent::SqsLength { value });
    }

    /// Set or clear the API key
    ///
    /// The key itself is never written to the log, only its presence.
    pub fn set_api_key(&self, value: Option<String>) {
        self.state.write().api_key = value.clone();
        tracing::debug!(present = value.is_some(), "api key updated");
        self.emit(SessionEvent::ApiKey { value });
    }

    pub fn set_api_type(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.write().api_type = value.clone();
        tracing::debug!(%value, "api type updated");
        self.emit(SessionEvent::ApiType { value });
    }

    pub fn set_api_url(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.write().api_url = value.clone();
        tracing::debug!(%value, "api url updated");
        self.emit(SessionEvent::ApiUrl { value });
    }

    pub fn set_selected_document_type(&self, value: DocumentType) {
        self.state.write().selected_document_type = value;
        tracing::debug!(value = value.as_str(), "document type filter updated");
        self.emit(SessionEvent::SelectedDocumentType { value });
    }

    pub fn set_selected_document_state(&self, value: DocumentState) {
        self.state.write().selected_document_state = value;
        tracing::debug!(value = value.as_str(), "document state filter updated");
        self.emit(SessionEvent::SelectedDocumentState { value });
    }

    pub fn set_search_in_document(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.write().search_in_document = value.clone();
        tracing::debug!(%value, "in-document search updated");
        self.emit(SessionEvent::SearchInDocument { value });
    }

    pub fn set_search_type(&self, value: SearchType) {
        self.state.write().search_type = value;
        tracing::debug!(value = value.as_str(), "search type updated");
        self.emit(SessionEvent::SearchType { value });
    }

    /// Broadcast an event to all subscribers
    ///
    /// A send with no subscribers is a no-op, not an error.
    fn emit(&self, event: SessionEvent) {
        let subscribers = self.events.receiver_count();
        if subscribers > 0 {
            tracing::trace!(event = event.name(), subscribers, "broadcasting session event");
            let _ = self.events.send(event);
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
