//! # Quill Memory
//!
//! In-memory implementations of the ports defined in `quill-core`: the
//! seeded content repository, the notification recorder, and the clipboard
//! share target. Nothing here persists - every collection dies with the
//! process, which is exactly the lifetime the session model calls for.

pub mod notify;
pub mod repository;
pub mod share;

pub use notify::InMemoryNotifier;
pub use repository::InMemoryContentRepository;
pub use share::InMemoryShareTarget;
