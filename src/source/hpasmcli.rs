//! hpasmcli-backed raw output source.
//!
//! Runs `hpasmcli -s "<command>"` one-shot per subsystem instead of
//! driving the interactive prompt, and bounds each query with a wall-clock
//! timeout. A query that overruns the deadline is killed and reaped, so a
//! wedged hpasmcli never leaves orphans behind for the scheduler's next
//! run to pile onto. Note: hpasmcli usually requires root (via sudo for
//! the monitoring user).

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::core::subsystem::Subsystem;
use crate::error::{CheckError, Result};
use crate::source::RawSource;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct HpasmcliSource {
    binary: PathBuf,
    timeout: Duration,
}

impl HpasmcliSource {
    /// Use the given binary path, or look up `hpasmcli` on PATH.
    pub fn new(binary: Option<PathBuf>, timeout: Duration) -> Result<Self> {
        let binary = match binary {
            Some(path) => path,
            None => which::which("hpasmcli")
                .map_err(|_| CheckError::acquisition("hpasmcli not found in PATH"))?,
        };
        Ok(HpasmcliSource { binary, timeout })
    }
}

impl RawSource for HpasmcliSource {
    fn acquire(&self, subsystem: Subsystem) -> Result<String> {
        let command = subsystem.command();
        debug!("running {:?} -s {:?}", self.binary, command);

        let mut child = Command::new(&self.binary)
            .arg("-s")
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CheckError::acquisition(format!("failed to run hpasmcli: {}", e)))?;

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(_)) => break,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(CheckError::Timeout(self.timeout.as_secs()));
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(err.into());
                }
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheckError::acquisition(format!(
                "hpasmcli exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if stdout.trim().is_empty() {
            return Err(CheckError::acquisition(format!(
                "hpasmcli produced no output for {:?}",
                command
            )));
        }
        Ok(stdout)
    }
}
