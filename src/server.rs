//! Listener setup and serving loop shared by both binaries.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::error::ServerError;

/// Listener configuration constructed once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Service name used in log output
    pub service: String,
    /// Address to listen on
    pub listen: SocketAddr,
}

impl ServerConfig {
    /// Create a new server configuration.
    ///
    /// # Parameters
    ///
    /// - `service` - Service name used in log output
    /// - `listen` - Address to bind
    ///
    /// # Returns
    ///
    /// Returns a new `ServerConfig` instance.
    pub fn new(service: impl Into<String>, listen: SocketAddr) -> Self {
        Self { service: service.into(), listen }
    }
}

/// Parse a listen address, rejecting port 0.
///
/// Responses report the configured port, so an ephemeral port is not allowed.
///
/// # Parameters
///
/// - `s` - Address string (e.g. "127.0.0.1:9002")
///
/// # Errors
///
/// Returns an error message if the address is malformed or uses port 0.
pub fn parse_listen_addr(s: &str) -> Result<SocketAddr, String> {
    let addr: SocketAddr = s.parse().map_err(|e| format!("invalid address: {e}"))?;
    if addr.port() == 0 {
        return Err("port must not be 0".to_string());
    }
    Ok(addr)
}

/// Bind a TCP listener on the given address.
///
/// # Errors
///
/// Returns `ServerError::Bind` if the address cannot be bound.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|source| ServerError::Bind { addr, source })
}

/// Bind the configured address and serve `app` until Ctrl+C or SIGTERM.
///
/// # Parameters
///
/// - `config` - Listener configuration
/// - `app` - Router to serve
///
/// # Errors
///
/// Returns `ServerError::Bind` on startup failure and `ServerError::Serve` if serving fails.
pub async fn run(config: &ServerConfig, app: Router) -> Result<(), ServerError> {
    let listener = bind(config.listen).await?;
    let addr = listener.local_addr()?;
    tracing::info!("starting {} on http://{addr}", config.service);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("{} stopped", config.service);
    Ok(())
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test listen address parsing.
    #[test]
    fn test_parse_listen_addr() {
        let addr = parse_listen_addr("127.0.0.1:9002").expect("valid address");
        assert_eq!(addr.port(), 9002);

        assert!(parse_listen_addr("127.0.0.1:0").is_err());
        assert!(parse_listen_addr("not-an-address").is_err());
        assert!(parse_listen_addr("127.0.0.1").is_err());
    }

    /// Test binding an ephemeral port succeeds.
    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("valid address");
        let listener = bind(addr).await.expect("bind ephemeral port");
        assert_ne!(listener.local_addr().expect("local addr").port(), 0);
    }

    /// Test binding an address already in use reports a bind error.
    #[tokio::test]
    async fn test_bind_conflict() {
        let first = bind("127.0.0.1:0".parse().expect("valid address"))
            .await
            .expect("bind ephemeral port");
        let taken = first.local_addr().expect("local addr");

        let err = bind(taken).await.err().expect("second bind must fail");
        match &err {
            ServerError::Bind { addr, .. } => assert_eq!(*addr, taken),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with(&format!("failed to bind {taken}")));
    }

    /// Test run surfaces a bind failure instead of serving.
    #[tokio::test]
    async fn test_run_fails_on_taken_port() {
        let first = bind("127.0.0.1:0".parse().expect("valid address"))
            .await
            .expect("bind ephemeral port");
        let config = ServerConfig::new("service-b", first.local_addr().expect("local addr"));

        let result = run(&config, Router::new()).await;
        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }
}
