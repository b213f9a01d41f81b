//! # Quill Core
//!
//! The domain layer of the Quill blogging platform: session-scoped engagement
//! state, content filtering, and comment threads layered over a read-only
//! content repository. All mutations live in per-session state and vanish
//! with the session; the repository is never written back.

pub mod dashboard;
pub mod domain;
pub mod editor;
pub mod engagement;
pub mod error;
pub mod feed;
pub mod ports;
pub mod session;
pub mod thread;

pub use error::{SessionError, ValidationError};
pub use session::ViewerSession;
