//! Errors raised while starting or running a stub service.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Failures of the listener lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound (e.g. port already in use).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
