//! Session Model
//!
//! The flat record of UI session fields and its typed enums. Fields are
//! independently mutable slots with documented defaults; there are no
//! cross-field invariants. Serialized field names are camelCase so snapshots
//! cross the adapter boundary in the shape the front-end expects.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_API_URL;

/// Default API backend label shown in the connection panel
pub const DEFAULT_API_TYPE: &str = "AWS Serverless";

/// Status string used before the first health probe reports in
pub const STATUS_UNKNOWN: &str = "unknown";

/// Kind of document the library filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Bare URL captured for later processing
    Link,
    /// Fetched page with extracted content
    Webpage,
    /// Video with a transcription track
    Youtube,
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::Link
    }
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Webpage => "webpage",
            Self::Youtube => "youtube",
        }
    }
}

/// Processing stage of a document in the ingestion pipeline
///
/// Wire values are the pipeline's SCREAMING_SNAKE_CASE status names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentState {
    UrlAdded,
    NeedTranscription,
    TranscriptionInProgress,
    TranscriptionDone,
    NeedManualReview,
    ReadyForTranslation,
    ReadyForEmbedding,
    EmbeddingExist,
    Error,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::NeedManualReview
    }
}

impl DocumentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UrlAdded => "URL_ADDED",
            Self::NeedTranscription => "NEED_TRANSCRIPTION",
            Self::TranscriptionInProgress => "TRANSCRIPTION_IN_PROGRESS",
            Self::TranscriptionDone => "TRANSCRIPTION_DONE",
            Self::NeedManualReview => "NEED_MANUAL_REVIEW",
            Self::ReadyForTranslation => "READY_FOR_TRANSLATION",
            Self::ReadyForEmbedding => "READY_FOR_EMBEDDING",
            Self::EmbeddingExist => "EMBEDDING_EXIST",
            Self::Error => "ERROR",
        }
    }
}

/// Matching mode for in-document search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Match the full phrase exactly
    Strict,
    /// Approximate / substring matching
    Fuzzy,
}

impl Default for SearchType {
    fn default() -> Self {
        Self::Strict
    }
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// Shared UI session state
///
/// A convenience bag of session variables for the dashboard: backend
/// connectivity, API endpoint selection, queue depth, and the document
/// browser's filter/search selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Database reachability as reported by the health probe
    pub database_status: String,

    /// VPN server reachability as reported by the health probe
    pub vpn_server_status: String,

    /// Depth of the ingestion work queue
    pub sqs_length: u32,

    /// API key entered by the user, if any
    pub api_key: Option<String>,

    /// Which API backend is targeted ("AWS Serverless", "custom", ...)
    pub api_type: String,

    /// Base URL of the API backend
    pub api_url: String,

    /// Document type filter in the library view
    pub selected_document_type: DocumentType,

    /// Document pipeline state filter in the library view
    pub selected_document_state: DocumentState,

    /// Current in-document search query
    pub search_in_document: String,

    /// Matching mode for in-document search
    pub search_type: SearchType,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            database_status: STATUS_UNKNOWN.to_string(),
            vpn_server_status: STATUS_UNKNOWN.to_string(),
            sqs_length: 0,
            api_key: None,
            api_type: DEFAULT_API_TYPE.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            selected_document_type: DocumentType::default(),
            selected_document_state: DocumentState::default(),
            search_in_document: String::new(),
            search_type: SearchType::default(),
        }
    }
}
