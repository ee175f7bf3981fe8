//! Command-line interface definitions for service B.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

use stub_services::http::state::SERVICE_B_PORT;
use stub_services::server::parse_listen_addr;

/// Command-line arguments for service B.
#[derive(Debug, Parser)]
#[command(name = "service-b")]
#[command(
    author,
    version,
    about = "Stub service B: echoes every path with its identity",
    after_help = "Set RUST_LOG=debug to log every received request."
)]
pub struct Cli {
    /// Address to listen on; its port is reported in every response
    #[arg(
        long,
        value_parser = parse_listen_addr,
        default_value_t = SocketAddr::from((Ipv4Addr::LOCALHOST, SERVICE_B_PORT))
    )]
    pub listen: SocketAddr,
}
