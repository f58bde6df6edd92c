//! Host connectivity checks.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::ApiError;

/// Answers whether the network is worth attempting.
///
/// Checked synchronously before every fetch attempt, so implementations
/// must be cheap enough to sit on that path.
pub trait Connectivity: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Probes a host with a short TCP connect.
///
/// There is no portable "is the network up" API, so this does the next
/// best thing: resolve the target and attempt a connection within a small
/// time budget. An unresolvable or unreachable target counts as offline.
pub struct TcpProbe {
    target: String,
    timeout: Duration,
}

impl TcpProbe {
    /// Probe `target` (a `host:port` pair) with the default 100ms budget.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            timeout: Duration::from_millis(100),
        }
    }

    /// Build a probe aimed at the host of `url`, on its scheme's default
    /// port when none is given.
    pub fn for_url(url: &str) -> Result<Self, ApiError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| ApiError::InvalidUrl(format!("no host in URL: {}", url)))?;
        let port = parsed.port_or_known_default().unwrap_or(443);
        Ok(Self::new(format!("{}:{}", host, port)))
    }

    /// Override the connect budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Connectivity for TcpProbe {
    fn is_online(&self) -> bool {
        let reachable = self
            .target
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .map(|addr| TcpStream::connect_timeout(&addr, self.timeout).is_ok())
            .unwrap_or(false);

        if !reachable {
            tracing::debug!(host = %self.target, "connectivity probe failed");
        }
        reachable
    }
}

/// Fixed-answer check for tests.
pub struct StaticConnectivity(pub bool);

impl Connectivity for StaticConnectivity {
    fn is_online(&self) -> bool {
        self.0
    }
}
