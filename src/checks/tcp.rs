//! TCP connectivity checker
//!
//! Tests TCP connection to a given host and port and reports the
//! connect-result code: 0 on success, the OS error number otherwise.

use crate::utils::TcpError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::Instant;

/// Code reported when the connect timer fires without an OS error
#[cfg(unix)]
pub const ETIMEDOUT: i32 = libc::ETIMEDOUT;
/// `WSAETIMEDOUT`
#[cfg(windows)]
pub const ETIMEDOUT: i32 = 10060;

/// Code reported for a connect error that carries no OS error number
pub const UNKNOWN_CONNECT_ERROR: i32 = -1;

/// Result of a single connect attempt sequence
#[derive(Debug, Clone)]
pub struct ConnectOutcome {
    /// Address the code belongs to
    pub addr: SocketAddr,
    /// 0 on success, OS error number otherwise
    pub code: i32,
    /// Error text for a non-zero code
    pub reason: Option<String>,
    pub elapsed: Duration,
}

impl ConnectOutcome {
    pub fn is_connected(&self) -> bool {
        self.code == 0
    }
}

/// Map a connect error onto a connect-result code
pub fn connect_code(err: &io::Error) -> i32 {
    err.raw_os_error().unwrap_or(match err.kind() {
        io::ErrorKind::TimedOut => ETIMEDOUT,
        _ => UNKNOWN_CONNECT_ERROR,
    })
}

/// TCP connectivity checker
pub struct TcpChecker {
    timeout: Duration,
}

impl TcpChecker {
    /// Create a new TCP checker with the given timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check TCP connectivity to the given host and port
    ///
    /// Resolution and every connect attempt share one deadline, so the whole
    /// check never outlasts the timeout. Resolved addresses are tried in
    /// order; the first that connects wins and the stream is closed right
    /// away. When none connect, the outcome of the last attempt is returned.
    pub async fn check(&self, host: &str, port: u16) -> Result<ConnectOutcome, TcpError> {
        if host.trim().is_empty() {
            return Err(TcpError::InvalidTarget {
                host: host.to_string(),
                port,
                reason: "host is empty".to_string(),
            });
        }
        if port == 0 {
            return Err(TcpError::InvalidTarget {
                host: host.to_string(),
                port,
                reason: "port must be non-zero".to_string(),
            });
        }

        let start = Instant::now();
        let deadline = start + self.timeout;

        let addrs: Vec<SocketAddr> =
            match tokio::time::timeout_at(deadline, tokio::net::lookup_host((host, port))).await {
                Ok(resolved) => resolved
                    .map_err(|e| TcpError::Resolve {
                        host: host.to_string(),
                        message: e.to_string(),
                    })?
                    .collect(),
                Err(_) => {
                    return Err(TcpError::Resolve {
                        host: host.to_string(),
                        message: format!("timed out after {}ms", self.timeout.as_millis()),
                    })
                }
            };

        if addrs.is_empty() {
            return Err(TcpError::NoAddresses {
                host: host.to_string(),
                port,
            });
        }

        let mut outcome = self.connect_within(&addrs, deadline).await;
        outcome.elapsed = start.elapsed();
        Ok(outcome)
    }

    /// Try each address in turn until one connects or the deadline passes
    ///
    /// `addrs` must not be empty.
    pub(crate) async fn connect_within(
        &self,
        addrs: &[SocketAddr],
        deadline: Instant,
    ) -> ConnectOutcome {
        let start = Instant::now();
        let mut last = None;

        for &addr in addrs {
            if Instant::now() >= deadline {
                last = Some(self.timed_out(addr, start));
                break;
            }

            let outcome = match tokio::time::timeout_at(deadline, TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => {
                    drop(stream);
                    ConnectOutcome {
                        addr,
                        code: 0,
                        reason: None,
                        elapsed: start.elapsed(),
                    }
                }
                Ok(Err(e)) => ConnectOutcome {
                    addr,
                    code: connect_code(&e),
                    reason: Some(e.to_string()),
                    elapsed: start.elapsed(),
                },
                Err(_) => self.timed_out(addr, start),
            };
            tracing::debug!(%addr, code = outcome.code, "tcp connect attempt");

            if outcome.is_connected() {
                return outcome;
            }
            last = Some(outcome);
        }

        last.unwrap_or_else(|| self.timed_out(addrs[0], start))
    }

    fn timed_out(&self, addr: SocketAddr, start: Instant) -> ConnectOutcome {
        ConnectOutcome {
            addr,
            code: ETIMEDOUT,
            reason: Some(format!("timed out after {}ms", self.timeout.as_millis())),
            elapsed: start.elapsed(),
        }
    }

    /// Check connectivity and return a simple boolean
    pub async fn is_reachable(&self, host: &str, port: u16) -> bool {
        self.check(host, port)
            .await
            .map(|o| o.is_connected())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_tcp_connect_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let checker = TcpChecker::new(Duration::from_secs(2));
        let outcome = checker.check("127.0.0.1", port).await.unwrap();
        assert_eq!(outcome.code, 0);
        assert!(outcome.reason.is_none());
    }

    #[tokio::test]
    async fn test_tcp_connect_refused() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let checker = TcpChecker::new(Duration::from_secs(2));
        let outcome = checker.check("127.0.0.1", port).await.unwrap();
        assert_ne!(outcome.code, 0);
        assert!(outcome.reason.is_some());
    }

    #[tokio::test]
    async fn test_port_zero_is_invalid() {
        let checker = TcpChecker::new(Duration::from_secs(2));
        let result = checker.check("localhost", 0).await;
        assert!(matches!(result, Err(TcpError::InvalidTarget { .. })));
    }

    #[tokio::test]
    async fn test_attempts_share_one_deadline() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let checker = TcpChecker::new(Duration::from_secs(2));
        let spent = Instant::now() - Duration::from_millis(1);
        let outcome = checker.connect_within(&[addr, addr], spent).await;
        assert_eq!(outcome.code, ETIMEDOUT);
        assert!(outcome.reason.unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn test_refused_addresses_stay_within_timeout() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let checker = TcpChecker::new(Duration::from_millis(500));
        let start = Instant::now();
        let outcome = checker
            .connect_within(&[addr; 4], start + checker.timeout())
            .await;
        assert_ne!(outcome.code, 0);
        assert!(start.elapsed() < Duration::from_millis(500) + Duration::from_millis(250));
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_code_is_the_os_timeout_errno() {
        let err = io::Error::from_raw_os_error(ETIMEDOUT);
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn test_connect_code_prefers_os_error() {
        let err = io::Error::from_raw_os_error(111);
        assert_eq!(connect_code(&err), 111);

        let err = io::Error::from(io::ErrorKind::TimedOut);
        assert_eq!(connect_code(&err), ETIMEDOUT);

        let err = io::Error::other("odd");
        assert_eq!(connect_code(&err), UNKNOWN_CONNECT_ERROR);
    }
}
