//! # User Service
//!
//! Stub backend returning a fixed user list on `GET /users` and echoing every other path.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use stub_services::http::{build_user_service_router, AppState, ServiceProfile};
use stub_services::server::{run, ServerConfig};
use stub_services::users::UserDirectory;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let state = match AppState::builder()
        .with_profile(ServiceProfile::user_service(cli.instance))
        .with_users(UserDirectory::builtin())
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = ServerConfig::new(state.profile.name.clone(), cli.listen);
    let app = build_user_service_router(state);

    match run(&config, app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
