//! HTTP routing configuration for both stub services.

use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::http::handlers::*;
use crate::http::state::AppState;

/// Path of the user listing endpoint.
pub const USERS_PATH: &str = "/users";

/// Catch-all route; the wildcard needs at least one character, so `/` is not matched.
pub const CATCH_ALL_PATH: &str = "/{*subpath}";

/// Echo handler bound to GET, POST, PUT and DELETE; OPTIONS lists them.
fn echo_methods() -> MethodRouter<AppState> {
    get(echo).post(echo).put(echo).delete(echo).options(allow)
}

/// Build the router of the user service.
///
/// # Parameters
///
/// - `state` - Application state with the user service profile and directory
///
/// # Returns
///
/// Returns `GET /users` plus the catch-all echo route.
pub fn build_user_service_router(state: AppState) -> Router {
    Router::new()
        .route(
            USERS_PATH,
            get(list_users).post(echo).put(echo).delete(echo).options(allow),
        )
        .route(CATCH_ALL_PATH, echo_methods())
        .with_state(state)
}

/// Build the router of service B.
///
/// # Parameters
///
/// - `state` - Application state with the service B profile
///
/// # Returns
///
/// Returns the catch-all echo route only.
pub fn build_service_b_router(state: AppState) -> Router {
    Router::new().route(CATCH_ALL_PATH, echo_methods()).with_state(state)
}
