//! Application state and service identity for the HTTP server.

use std::io;
use std::sync::Arc;

use crate::http::types::{EchoResponse, ServiceTag};
use crate::users::UserDirectory;

/// Name reported by the user service.
pub const USER_SERVICE_NAME: &str = "user-service";

/// Name reported by service B.
pub const SERVICE_B_NAME: &str = "service-b";

/// Default instance identifier of the user service.
pub const DEFAULT_INSTANCE: &str = "instance-1";

/// Default port of the user service.
pub const USER_SERVICE_PORT: u16 = 8081;

/// Default port of service B.
pub const SERVICE_B_PORT: u16 = 9002;

/// Identity of a running stub service.
///
/// Everything a handler needs to build a response that identifies the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProfile {
    /// Value of the `service` field
    pub name: String,
    /// Name used inside the echo message
    pub display_name: String,
    /// Instance or port identifier
    pub tag: ServiceTag,
    /// Whether echo responses include the request method
    pub echo_method: bool,
}

impl ServiceProfile {
    /// Profile of the user service.
    ///
    /// # Parameters
    ///
    /// - `instance` - Instance identifier reported in every response
    ///
    /// # Returns
    ///
    /// Returns a profile that echoes the request method.
    pub fn user_service(instance: impl Into<String>) -> Self {
        Self {
            name: USER_SERVICE_NAME.to_string(),
            display_name: USER_SERVICE_NAME.to_string(),
            tag: ServiceTag::Instance(instance.into()),
            echo_method: true,
        }
    }

    /// Profile of service B.
    ///
    /// # Parameters
    ///
    /// - `port` - Port reported in every response
    ///
    /// # Returns
    ///
    /// Returns a profile that does not echo the request method.
    pub fn service_b(port: u16) -> Self {
        Self {
            name: SERVICE_B_NAME.to_string(),
            display_name: "Service B".to_string(),
            tag: ServiceTag::Port(port),
            echo_method: false,
        }
    }

    /// Build the echo body for a request.
    ///
    /// # Parameters
    ///
    /// - `method` - Incoming HTTP method
    /// - `subpath` - Requested path without the leading slash
    ///
    /// # Returns
    ///
    /// Returns the `EchoResponse` identifying this service.
    pub fn echo(&self, method: &str, subpath: &str) -> EchoResponse {
        EchoResponse {
            message: format!("Response from {} for path: /{subpath}", self.display_name),
            service: self.name.clone(),
            tag: self.tag.clone(),
            method: self.echo_method.then(|| method.to_string()),
        }
    }
}

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Identity of this service
    pub profile: Arc<ServiceProfile>,
    /// Users served by `GET /users`
    pub users: Arc<UserDirectory>,
}

impl AppState {
    /// Create new application state.
    ///
    /// # Parameters
    ///
    /// - `profile` - Service identity
    /// - `users` - User directory
    ///
    /// # Returns
    ///
    /// Returns configured `AppState` instance.
    pub fn new(profile: ServiceProfile, users: UserDirectory) -> Self {
        Self { profile: Arc::new(profile), users: Arc::new(users) }
    }

    /// Get a builder for configuring application state step by step.
    ///
    /// # Returns
    ///
    /// Returns an `AppStateBuilder` for fluent configuration.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Builder for constructing AppState with fluent interface.
#[derive(Default)]
pub struct AppStateBuilder {
    profile: Option<ServiceProfile>,
    users: Option<UserDirectory>,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service identity.
    ///
    /// # Parameters
    ///
    /// - `profile` - Service identity to report
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_profile(mut self, profile: ServiceProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set the user directory.
    ///
    /// # Parameters
    ///
    /// - `users` - Directory served by `GET /users`
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_users(mut self, users: UserDirectory) -> Self {
        self.users = Some(users);
        self
    }

    /// Build the final AppState with validation.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppState)` if valid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no profile is set or the profile has an empty name.
    pub fn build(self) -> io::Result<AppState> {
        let profile = self.profile.ok_or(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Service profile is required for AppState",
        ))?;

        if profile.name.trim().is_empty() || profile.display_name.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Service name must not be empty",
            ));
        }

        let users = self.users.unwrap_or_default();

        Ok(AppState::new(profile, users))
    }
}
