//! Docdeck Session State Library
//!
//! This library provides the shared UI session state for the docdeck
//! dashboard, including:
//! - Session state container with per-field setters and change broadcasting
//! - Typed session events consumed by GUI adapters
//! - TOML configuration and logging setup

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use config::Settings;
pub use error::{ConfigError, DocdeckError, Result};
pub use session::{
    create_shared_session, DocumentState, DocumentType, SearchType, SessionContext, SessionEvent,
    SessionState, SharedSession,
};
