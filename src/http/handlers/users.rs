//! User listing handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::http::state::AppState;
use crate::http::types::UsersResponse;

/// List the fixed user directory.
///
/// # Parameters
///
/// - `state` - Application state containing the user directory
///
/// # Returns
///
/// Returns all users in directory order together with the service identity.
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(UsersResponse {
            users: state.users.records(),
            service: &state.profile.name,
            tag: &state.profile.tag,
        }),
    )
        .into_response()
}
