//! Catch-all echo handlers.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::percent_decode_str;

use crate::http::state::AppState;

/// Methods advertised in the `Allow` header of `OPTIONS` responses.
pub const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, POST, PUT";

/// Echo the request path back with the service identity.
///
/// The path is taken from the raw request URI, so the query string never
/// reaches the message and escapes that are not valid UTF-8 still get a 200.
///
/// # Parameters
///
/// - `state` - Application state containing the service profile
/// - `method` - Incoming HTTP method
/// - `uri` - Request URI
///
/// # Returns
///
/// Returns 200 with an `EchoResponse` body.
pub async fn echo(State(state): State<AppState>, method: Method, uri: Uri) -> impl IntoResponse {
    let path = decode_path(uri.path());
    let subpath = path.strip_prefix('/').unwrap_or(path.as_str());
    tracing::debug!(service = %state.profile.name, %path, %method, "received request");
    (StatusCode::OK, Json(state.profile.echo(method.as_str(), subpath))).into_response()
}

/// Answer `OPTIONS` with the supported methods.
pub async fn allow() -> Response {
    (StatusCode::OK, [(header::ALLOW, ALLOWED_METHODS)]).into_response()
}

/// Percent-decode a raw path, replacing invalid UTF-8 with U+FFFD.
pub fn decode_path(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use axum::http::{Method, Uri};

    use crate::http::state::{AppState, ServiceProfile, DEFAULT_INSTANCE, SERVICE_B_PORT};

    use super::*;

    fn state_for(profile: ServiceProfile) -> AppState {
        AppState::builder().with_profile(profile).build().expect("valid configuration")
    }

    fn uri(s: &str) -> Uri {
        s.parse().expect("valid URI")
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let (_, body) = response.into_parts();
        let body_bytes = axum::body::to_bytes(body, usize::MAX).await.expect("read body");
        serde_json::from_slice(&body_bytes).expect("parse JSON")
    }

    /// Test user service echo includes the method.
    #[tokio::test]
    async fn test_echo_user_service() {
        let state = state_for(ServiceProfile::user_service(DEFAULT_INSTANCE));

        let response = echo(State(state), Method::POST, uri("/orders/5")).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Response from user-service for path: /orders/5",
                "service": "user-service",
                "instance": "instance-1",
                "method": "POST"
            })
        );
    }

    /// Test service B echo omits the method and reports the port.
    #[tokio::test]
    async fn test_echo_service_b() {
        let state = state_for(ServiceProfile::service_b(SERVICE_B_PORT));

        let response = echo(State(state), Method::DELETE, uri("/items/42")).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Response from Service B for path: /items/42",
                "service": "service-b",
                "port": 9002
            })
        );
    }

    /// Test invalid UTF-8 escapes are echoed lossily instead of rejected.
    #[tokio::test]
    async fn test_echo_invalid_utf8_escape() {
        let state = state_for(ServiceProfile::service_b(SERVICE_B_PORT));

        let response = echo(State(state), Method::GET, uri("/%FF")).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Response from Service B for path: /\u{FFFD}");
    }

    /// Test the query string is not part of the echoed path.
    #[tokio::test]
    async fn test_echo_ignores_query() {
        let state = state_for(ServiceProfile::user_service(DEFAULT_INSTANCE));

        let response = echo(State(state), Method::GET, uri("/search?q=1")).await.into_response();
        let json = body_json(response).await;
        assert_eq!(json["message"], "Response from user-service for path: /search");
    }

    /// Test OPTIONS advertises the supported methods.
    #[tokio::test]
    async fn test_allow() {
        let response = allow().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ALLOW).expect("allow header"),
            ALLOWED_METHODS
        );
    }

    /// Test percent decoding of raw paths.
    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/a%20b"), "/a b");
        assert_eq!(decode_path("/%E4%B8%AD"), "/\u{4E2D}");
        assert_eq!(decode_path("/a%2Fb"), "/a/b");
        assert_eq!(decode_path("/a;b:c@d"), "/a;b:c@d");
        assert_eq!(decode_path("/%FF"), "/\u{FFFD}");
        assert_eq!(decode_path("/users/"), "/users/");
    }
}
