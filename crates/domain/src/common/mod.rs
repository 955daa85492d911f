//! Common utility functions shared by the domain models and the console.
//!
//! Pure functions only: no I/O, WASM compatible.

pub mod datetime;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use datetime::{format_display_date, parse_timestamp};
pub use string::{is_blank, is_http_url, none_if_blank, StringExt};
