//! HTTP handlers for the stub service endpoints.

pub mod echo;
pub mod users;

// Re-export handlers for easier access
pub use echo::{allow, echo};
pub use users::list_users;
