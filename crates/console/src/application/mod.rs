//! Application layer - services and page state machines
//!
//! Nothing here touches reqwest, the filesystem or Dioxus directly; state is
//! reached through [`resource::StateCell`] and I/O through the outbound ports.

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod resource;
pub mod services;

pub use config::{ConfigError, ConsoleConfig};
pub use error::ServiceError;
