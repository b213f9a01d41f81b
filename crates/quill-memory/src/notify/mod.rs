//! Notifier implementations - in-memory only.

mod memory;

pub use memory::InMemoryNotifier;
