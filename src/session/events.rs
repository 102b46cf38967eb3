//! Session change events
//!
//! Every mutation of the shared session state is announced through one of
//! these payloads. UI components subscribe via
//! [`SessionContext::subscribe`](super::context::SessionContext::subscribe)
//! and re-render from the carried value; adapters that bridge a webview
//! forward the JSON form as-is. The `Snapshot` variant seeds a newly attached
//! view with the full state so it does not have to replay history.

use serde::{Deserialize, Serialize};

use super::model::{DocumentState, DocumentType, SearchType, SessionState};

/// A single session state change
///
/// Tagged with the camelCase name of the field that changed, matching the
/// front-end's field naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    /// Full state snapshot, emitted when an adapter attaches a new view
    Snapshot { state: SessionState },

    DatabaseStatus { value: String },
    VpnServerStatus { value: String },
    SqsLength { value: u32 },
    ApiKey { value: Option<String> },
    ApiType { value: String },
    ApiUrl { value: String },
    SelectedDocumentType { value: DocumentType },
    SelectedDocumentState { value: DocumentState },
    SearchInDocument { value: String },
    SearchType { value: SearchType },
}

impl SessionEvent {
    /// Stable event name, as used in the serialized `type` tag
    ///
    /// Suitable for log lines; unlike `Debug`, it never exposes payload
    /// values such as the API key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Snapshot { .. } => "snapshot",
            Self::DatabaseStatus { .. } => "databaseStatus",
            Self::VpnServerStatus { .. } => "vpnServerStatus",
            Self::SqsLength { .. } => "sqsLength",
            Self::ApiKey { .. } => "apiKey",
            Self::ApiType { .. } => "apiType",
            Self::ApiUrl { .. } => "apiUrl",
            Self::SelectedDocumentType { .. } => "selectedDocumentType",
            Self::SelectedDocumentState { .. } => "selectedDocumentState",
            Self::SearchInDocument { .. } => "searchInDocument",
            Self::SearchType { .. } => "searchType",
        }
    }

    /// Serialize for adapters that forward events over an IPC/webview boundary
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
