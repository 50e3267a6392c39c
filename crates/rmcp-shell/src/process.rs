//! Deadline-bounded subprocess runner shared by the command and fetch tools.

use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

/// Failure to obtain an [`ExecutionResult`] from a subprocess.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to spawn process: {0}")]
    Spawn(#[source] io::Error),

    #[error("process exceeded deadline of {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("I/O error while collecting process output: {0}")]
    Io(#[source] io::Error),
}

impl RunError {
    /// True when the program itself could not be found on the execution path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RunError::Spawn(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Captured output of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Spawn `command`, capture both streams and wait at most `deadline`.
///
/// On expiry the child is killed (on Unix together with its process group, so
/// anything the shell forked dies too) and reaped before returning
/// [`RunError::Timeout`]. Stdin is detached so the child can never read the
/// protocol channel.
pub async fn run_with_deadline(
    mut command: Command,
    deadline: Duration,
) -> Result<ExecutionResult, RunError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(unix)]
    command.process_group(0);

    let mut child = command.spawn().map_err(RunError::Spawn)?;
    let pid = child.id();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let outcome = tokio::time::timeout(deadline, async {
        tokio::try_join!(child.wait(), drain(stdout), drain(stderr))
    })
    .await;

    match outcome {
        Ok(Ok((status, stdout, stderr))) => Ok(ExecutionResult {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            exit_code: exit_code(status),
        }),
        Ok(Err(e)) => Err(RunError::Io(e)),
        Err(_) => {
            warn!(pid = ?pid, deadline_secs = deadline.as_secs(), "Process exceeded deadline, killing");
            terminate(&mut child, pid).await;
            Err(RunError::Timeout(deadline))
        }
    }
}

async fn drain<R: AsyncRead + Unpin>(reader: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        reader.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

async fn terminate(child: &mut Child, pid: Option<u32>) {
    #[cfg(unix)]
    {
        use nix::errno::Errno;
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;

        if let Some(pid) = pid {
            match killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
                Ok(()) | Err(Errno::ESRCH) => {}
                Err(e) => warn!(pid = %pid, error = %e, "Failed to kill process group"),
            }
        }
    }
    #[cfg(not(unix))]
    let _ = pid;

    // Reaps the child; fails harmlessly if it already exited.
    if let Err(e) = child.kill().await {
        debug!(error = %e, "Child kill after deadline reported an error");
    }
}

/// Exit code of a finished process; signal deaths map to the negated signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
