//! TCP connection acceptor.
//!
//! Wraps a [`TcpListener`] as an axum [`Listener`]. `axum::serve` pulls
//! connections from it and serves each one on its own task, so a slow client
//! never holds up the next `accept`.

use axum::serve::Listener;
use metrics::counter;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, warn};

/// Pause after an accept error that is not tied to a single connection,
/// such as running out of file descriptors.
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Accepts inbound connections forever.
///
/// Accept errors are logged and never end the loop.
pub struct ConnectionAcceptor {
    listener: TcpListener,
}

impl ConnectionAcceptor {
    pub fn new(listener: TcpListener) -> Self {
        Self { listener }
    }
}

impl Listener for ConnectionAcceptor {
    type Io = TcpStream;
    type Addr = SocketAddr;

    async fn accept(&mut self) -> (Self::Io, Self::Addr) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!(%peer, "Failed to set TCP_NODELAY: {}", e);
                    }
                    counter!("connections_accepted_total").increment(1);
                    debug!(%peer, "Connection accepted");
                    return (stream, peer);
                }
                Err(e) if is_connection_error(&e) => {
                    debug!("Connection dropped before accept: {}", e);
                }
                Err(e) => {
                    error!("Error while accepting connection: {}", e);
                    tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                }
            }
        }
    }

    fn local_addr(&self) -> io::Result<Self::Addr> {
        self.listener.local_addr()
    }
}

fn is_connection_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}
