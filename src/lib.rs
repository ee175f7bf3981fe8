//! # Stub Services Library
//!
//! Minimal HTTP stub services used to simulate backend microservices in tests.
//!
//! This library provides components for:
//! - **User Service**: `GET /users` returns a fixed user list, every other path is echoed
//! - **Service B**: every path is echoed with an identifying payload
//! - **Server**: listener setup with graceful shutdown shared by both binaries
//!
//! # Examples
//!
//! ```no_run
//! use stub_services::http::{build_user_service_router, AppState, ServiceProfile};
//! use stub_services::server::{run, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::builder()
//!     .with_profile(ServiceProfile::user_service("instance-1"))
//!     .build()?;
//! let app = build_user_service_router(state);
//!
//! let config = ServerConfig::new("user-service", "0.0.0.0:8081".parse()?);
//! run(&config, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod server;
pub mod users;

// Re-export commonly used types for convenience
pub use error::ServerError;
pub use http::{AppState, ServiceProfile};
pub use server::ServerConfig;
pub use users::{UserDirectory, UserRecord};
