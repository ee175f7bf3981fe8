//! Command-line interface definitions for the user service.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

use stub_services::http::state::{DEFAULT_INSTANCE, USER_SERVICE_PORT};
use stub_services::server::parse_listen_addr;

/// Command-line arguments for the user service.
#[derive(Debug, Parser)]
#[command(name = "user-service")]
#[command(
    author,
    version,
    about = "Stub user service: fixed user list on /users, echo on every other path",
    after_help = "Set RUST_LOG=debug to log every received request."
)]
pub struct Cli {
    /// Address to listen on
    #[arg(
        long,
        value_parser = parse_listen_addr,
        default_value_t = SocketAddr::from((Ipv4Addr::UNSPECIFIED, USER_SERVICE_PORT))
    )]
    pub listen: SocketAddr,

    /// Instance identifier reported in every response
    #[arg(long, default_value = DEFAULT_INSTANCE)]
    pub instance: String,
}
