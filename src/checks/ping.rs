//! Loopback reachability checker
//!
//! Runs the OS ping utility for a single echo request and reports its exit
//! status. Output is parsed for nothing but the exit code.

use crate::utils::PingError;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

/// Flag that limits ping to a packet count
#[cfg(windows)]
pub const COUNT_FLAG: &str = "-n";
#[cfg(not(windows))]
pub const COUNT_FLAG: &str = "-c";

/// Captured result of a ping run that exited normally
#[derive(Debug, Clone)]
pub struct PingOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl PingOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Ping checker
pub struct PingChecker {
    program: String,
    host: String,
    timeout: Duration,
}

impl PingChecker {
    /// Create a new ping checker
    pub fn new(program: impl Into<String>, host: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            host: host.into(),
            timeout,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Arguments passed to the ping program
    pub fn args(&self) -> [&str; 3] {
        [COUNT_FLAG, "1", self.host.as_str()]
    }

    /// Send one echo request to the configured host
    ///
    /// The child is reaped before this returns on every path. When the
    /// timeout fires it is killed and waited for.
    pub async fn check(&self) -> Result<PingOutput, PingError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let start = Instant::now();
        let mut child = cmd
            .spawn()
            .map_err(|e| PingError::from_spawn(&self.program, e))?;

        let waited = tokio::time::timeout(self.timeout, collect_output(&mut child)).await;
        let (status, stdout, stderr) = match waited {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                self.reap(&mut child).await;
                return Err(PingError::Wait {
                    program: self.program.clone(),
                    source: e,
                });
            }
            Err(_) => {
                self.reap(&mut child).await;
                return Err(PingError::Timeout {
                    program: self.program.clone(),
                    secs: self.timeout.as_secs(),
                });
            }
        };

        let exit_code = status.code().ok_or_else(|| PingError::Terminated {
            program: self.program.clone(),
        })?;

        Ok(PingOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            elapsed: start.elapsed(),
        })
    }

    /// Kill the child if it is still running and wait for it
    async fn reap(&self, child: &mut Child) {
        if let Ok(Some(_)) = child.try_wait() {
            return;
        }
        if let Err(e) = child.kill().await {
            tracing::warn!(program = %self.program, "failed to kill ping child: {}", e);
        }
    }
}

/// Wait for the child while draining both pipes
async fn collect_output(child: &mut Child) -> io::Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
    let mut stdout_pipe = child.stdout.take();
    let mut stderr_pipe = child.stderr.take();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let (status, _, _) = tokio::try_join!(
        child.wait(),
        read_pipe(&mut stdout_pipe, &mut stdout),
        read_pipe(&mut stderr_pipe, &mut stderr),
    )?;
    Ok((status, stdout, stderr))
}

async fn read_pipe<R>(pipe: &mut Option<R>, buf: &mut Vec<u8>) -> io::Result<()>
where
    R: AsyncRead + Unpin,
{
    if let Some(pipe) = pipe {
        pipe.read_to_end(buf).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_send_one_packet() {
        let checker = PingChecker::new("ping", "localhost", Duration::from_secs(5));
        assert_eq!(checker.args(), [COUNT_FLAG, "1", "localhost"]);
    }

    #[tokio::test]
    async fn test_missing_program_is_not_found() {
        let checker = PingChecker::new(
            "ci-smoke-no-such-ping-binary",
            "localhost",
            Duration::from_secs(5),
        );
        let result = checker.check().await;
        assert!(matches!(result, Err(PingError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_status_is_reported() {
        let checker = PingChecker::new("false", "localhost", Duration::from_secs(5));
        let output = checker.check().await.unwrap();
        assert!(!output.success());
        assert_ne!(output.exit_code, 0);
    }
}
