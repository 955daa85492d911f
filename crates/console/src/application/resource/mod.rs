//! Resource pages - one generic controller for every CRUD screen
//!
//! The page is split the same way the screen is: a list of cards with
//! pagination, a create/edit form dialog, a detail dialog with a guarded delete.
//! Each piece is a plain state machine; [`ResourceManager`] sequences them
//! around the network calls.

mod controller;
mod detail;
mod form;
mod list_view;
mod listing;
mod manager;
mod state_cell;

#[cfg(test)]
mod tests;

pub use controller::{ActiveView, ResourceController};
pub use detail::{DeleteConfirmation, DetailRow, DetailView};
pub use form::{FormState, ImagePreview, Submission};
pub use list_view::{Card, ListView, PageControls};
pub use listing::{FetchTicket, Listing, ListingState};
pub use manager::{ResourceManager, ResourcePageState};
pub use state_cell::StateCell;
