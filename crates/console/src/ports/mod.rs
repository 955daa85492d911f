//! Port definitions - the boundaries application code depends on.

pub mod outbound;
