//! Response bodies returned by the stub services.

use serde::Serialize;

use crate::users::UserRecord;

/// Identifying field attached to every response.
///
/// Serialized as a single key next to `service`, either `"instance"` or `"port"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTag {
    /// Named instance (user service)
    Instance(String),
    /// Listening port (service B)
    Port(u16),
}

/// Body of `GET /users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse<'a> {
    /// Fixed user list in directory order
    pub users: &'a [UserRecord],
    /// Service name
    pub service: &'a str,
    /// Instance or port identifier
    #[serde(flatten)]
    pub tag: &'a ServiceTag,
}

/// Body returned by the catch-all echo route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoResponse {
    /// Human readable message containing the requested path
    pub message: String,
    /// Service name
    pub service: String,
    /// Instance or port identifier
    #[serde(flatten)]
    pub tag: ServiceTag,
    /// Incoming HTTP method, only for services that echo it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}
