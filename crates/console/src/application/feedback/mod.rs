//! Feedback pages - comments on films and reviews of songs
//!
//! Unlike the catalog screens these are unpaginated: the board shows every
//! entry, or only the entries of one parent when a filter is chosen, with an
//! inline compose form above the list.

mod board;
mod manager;

pub use board::{FeedbackBoard, FeedbackEntry};
pub use manager::FeedbackManager;
