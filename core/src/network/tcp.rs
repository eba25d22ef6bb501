use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use seedscan_common::config::{DEFAULT_PORT, DEFAULT_TIMEOUT, ScanConfig};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Decides whether a single address is reachable.
///
/// Implementations never fail: every error is an unreachable host.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, addr: Ipv4Addr) -> bool;
}

/// Connects to `addr:port` and hangs up as soon as the handshake completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpProber {
    pub port: u16,
    pub timeout: Duration,
}

impl TcpProber {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_TIMEOUT)
    }
}

impl From<&ScanConfig> for TcpProber {
    fn from(cfg: &ScanConfig) -> Self {
        Self::new(cfg.port, cfg.timeout)
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: Ipv4Addr) -> bool {
        handshake_probe(addr, self.port, self.timeout).await
    }
}

pub async fn handshake_probe(addr: Ipv4Addr, port: u16, probe_timeout: Duration) -> bool {
    let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(addr), port);

    match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) => {
            trace!(%socket_addr, error = %e, "connect failed");
            false
        }
        Err(_elapsed) => {
            trace!(%socket_addr, "connect timed out");
            false
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
