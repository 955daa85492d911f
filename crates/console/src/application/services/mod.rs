//! Application services

pub mod resource_service;
pub mod session_service;

pub use resource_service::ResourceService;
pub use session_service::SessionService;
