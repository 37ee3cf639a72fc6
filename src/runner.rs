use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Terminal failure of one scanner invocation
#[derive(Debug)]
pub enum RunError {
    /// The executable could not be spawned at all
    Launch(std::io::Error),
    /// The process ran but exited non-zero; accumulated output is discarded
    NonZeroExit(ExitStatus),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Launch(e) => write!(f, "Failed to start fenjing: {}", e),
            RunError::NonZeroExit(status) => match status.code() {
                Some(code) => write!(f, "fenjing exited with code {}", code),
                None => write!(f, "fenjing terminated abnormally: {}", status),
            },
        }
    }
}

/// Run the scanner executable to completion and collect its combined output.
///
/// Stdout and stderr chunks are appended to one buffer in the order the OS
/// delivers them; there is no reordering and no line buffering. The wait is
/// unbounded; callers wanting a deadline can wrap this future in a timeout.
pub async fn run_to_completion(executable: &Path, args: &[String]) -> Result<String, RunError> {
    let mut child = Command::new(executable)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(RunError::Launch)?;

    // Both handles exist because both streams were piped above.
    let mut stdout = child.stdout.take().expect("child stdout is piped");
    let mut stderr = child.stderr.take().expect("child stderr is piped");

    let mut combined = String::new();
    let mut out_buf = vec![0u8; 4096];
    let mut err_buf = vec![0u8; 4096];
    let mut out_open = true;
    let mut err_open = true;

    while out_open || err_open {
        tokio::select! {
            read = stdout.read(&mut out_buf), if out_open => match read {
                Ok(0) | Err(_) => out_open = false,
                Ok(n) => combined.push_str(&String::from_utf8_lossy(&out_buf[..n])),
            },
            read = stderr.read(&mut err_buf), if err_open => match read {
                Ok(0) | Err(_) => err_open = false,
                Ok(n) => combined.push_str(&String::from_utf8_lossy(&err_buf[..n])),
            },
        }
    }

    // Exit arrives after both pipes have drained.
    let status = child.wait().await.map_err(RunError::Launch)?;
    if status.success() {
        Ok(combined)
    } else {
        Err(RunError::NonZeroExit(status))
    }
}
