//! mediadmin console crate.
//!
//! UI, application logic and infrastructure adapters for the catalog admin
//! console. Platform differences (desktop vs browser) are selected with `cfg`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::{app, Route};
