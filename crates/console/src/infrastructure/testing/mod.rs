//! In-process stand-ins for the catalog backend
//!
//! Compiled into every build: the test suites use them, and demo mode
//! (`MEDIADMIN_DEMO=1`) serves the whole console from [`InMemoryBackend`].

pub mod fixtures;
mod in_memory_backend;

pub use in_memory_backend::{CallMethod, InMemoryBackend, RecordedCall};
