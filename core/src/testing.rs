//! Canned tool outcomes for the adapter tests.

use std::time::Duration;

use localnet_common::utils::command::{ToolError, ToolOutput};

pub(crate) fn exited(code: i32, stdout: &str) -> Result<ToolOutput, ToolError> {
    Ok(ToolOutput {
        code: Some(code),
        stdout: stdout.to_string(),
    })
}

pub(crate) fn not_installed(program: &str) -> Result<ToolOutput, ToolError> {
    Err(ToolError::NotInstalled(program.to_string()))
}

pub(crate) fn timed_out(program: &str) -> Result<ToolOutput, ToolError> {
    Err(ToolError::Timeout {
        program: program.to_string(),
        timeout: Duration::from_secs(1),
    })
}

pub(crate) fn killed() -> Result<ToolOutput, ToolError> {
    Ok(ToolOutput {
        code: None,
        stdout: String::new(),
    })
}
