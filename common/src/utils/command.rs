//! Runs the external discovery tools (`ip`, `arp-scan`, `nmap`, ...).
//!
//! Every invocation is bounded by a timeout. A child that outlives it is
//! killed when its future is dropped.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0} is not installed")]
    NotInstalled(String),

    #[error("{program} did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when the tool was terminated by a signal.
    pub code: Option<i32>,
    /// Standard output, lossily decoded and trimmed.
    pub stdout: String,
}

impl ToolOutput {
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }

    /// `true` when the tool exited with one of `codes` and printed anything.
    pub fn has_output_with(&self, codes: &[i32]) -> bool {
        self.code.is_some_and(|code| codes.contains(&code)) && !self.stdout.is_empty()
    }
}

pub async fn run(program: &str, args: &[&str], timeout: Duration) -> Result<ToolOutput, ToolError> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(timeout, child).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ToolError::NotInstalled(program.to_string()));
        }
        Ok(Err(source)) => {
            return Err(ToolError::Io {
                program: program.to_string(),
                source,
            });
        }
        Err(_) => {
            return Err(ToolError::Timeout {
                program: program.to_string(),
                timeout,
            });
        }
    };

    let code = output.status.code();
    debug!("{program} {} exited with {code:?}", args.join(" "));

    Ok(ToolOutput {
        code,
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
    })
}
