//! HTTP surface shared by the stub services.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::{build_service_b_router, build_user_service_router};
pub use state::{AppState, ServiceProfile};
