//! Session State
//!
//! The shared UI session: state record, change events, and the context
//! provider handed to GUI adapters.

pub mod context;
pub mod events;
pub mod model;

pub use context::{create_shared_session, SessionContext, SharedSession};
pub use events::SessionEvent;
pub use model::{DocumentState, DocumentType, SearchType, SessionState};
