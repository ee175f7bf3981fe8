//! # Service B
//!
//! Stub backend echoing every path with an identifying payload.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use stub_services::http::{build_service_b_router, AppState, ServiceProfile};
use stub_services::server::{run, ServerConfig};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let state = match AppState::builder()
        .with_profile(ServiceProfile::service_b(cli.listen.port()))
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = ServerConfig::new(state.profile.name.clone(), cli.listen);

    match run(&config, build_service_b_router(state)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
