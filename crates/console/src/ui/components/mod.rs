//! Page and widget components

mod common;
mod feedback_page;
mod resource_page;
mod sign_in;

pub use common::{ErrorBanner, FieldInput, Modal, RelationSelect, Spinner};
pub use feedback_page::feedback_page;
pub use resource_page::resource_page;
pub use sign_in::SignInPage;
