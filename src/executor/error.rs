//! Executor error types.

use thiserror::Error;

/// Errors that can occur while running cleanup routines.
#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("command failed: {cmd}\nstderr: {stderr}")]
    CommandFailedWithStderr { cmd: String, stderr: String },

    #[error("command failed: {cmd} (exit code: {code:?})")]
    CommandFailed { cmd: String, code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no supported package manager found on remote host")]
    NoPackageManager,
}
