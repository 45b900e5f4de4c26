use std::{process::Stdio, time::Duration};

use tokio::process::Command;
use tracing::{trace, warn};

use super::AudioError;

/// Runs `program` with `args` and returns its stdout.
///
/// The child is spawned with `kill_on_drop`, so when `timeout` elapses the
/// pending wait is dropped and the process is killed. The C locale is forced
/// so output can be parsed regardless of the user's language.
///
/// # Errors
///
/// - `AudioError::Spawn` if the program cannot be started or waited on
/// - `AudioError::Timeout` if it runs longer than `timeout`
/// - `AudioError::HelperFailed` if it exits unsuccessfully
pub async fn run(program: &str, args: &[&str], timeout: Duration) -> Result<String, AudioError> {
    let spawn_error = |source| AudioError::Spawn {
        program: program.to_string(),
        source,
    };

    let child = Command::new(program)
        .args(args)
        .env("LC_ALL", "C")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(spawn_error)?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result.map_err(spawn_error)?,
        Err(_) => {
            warn!(program, ?args, "audio helper timed out, killing it");
            return Err(AudioError::Timeout(timeout));
        }
    };

    if !output.status.success() {
        return Err(AudioError::HelperFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    trace!(program, ?args, %stdout, "audio helper finished");

    Ok(stdout)
}
