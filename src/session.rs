//! Remote session handling.
//!
//! Every cleanup command runs on the target instance through the system ssh
//! client, configured once from the parsed arguments. Commands are built as
//! argument lists, never as interpolated shell strings.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::executor::ExecuteError;

/// Connection attempts the ssh client makes before giving up.
pub const CONNECTION_ATTEMPTS: u32 = 100;

/// Captured output of a completed remote command.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Remote command execution seam.
///
/// The cleanup routines only ever issue privileged commands and OS package
/// removals; tests substitute a recording implementation.
pub trait RemoteShell {
    /// Run a command on the remote host with root privileges.
    fn execute_privileged(&self, args: &[&str]) -> Result<CmdOutput, ExecuteError>;

    /// Remove OS packages using whichever package manager the host carries.
    fn remove_os_pkg(&self, packages: &[&str]) -> Result<(), ExecuteError>;
}

/// A configured ssh session against one target instance.
#[derive(Debug, Clone)]
pub struct SshSession {
    host: String,
    user: String,
    keyfile: PathBuf,
    connection_attempts: u32,
    dry_run: bool,
    verbose: bool,
}

impl SshSession {
    /// Create a session for `user@host` authenticated by `keyfile`.
    pub fn new(host: impl Into<String>, user: impl Into<String>, keyfile: impl AsRef<Path>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            keyfile: keyfile.as_ref().to_path_buf(),
            connection_attempts: CONNECTION_ATTEMPTS,
            dry_run: false,
            verbose: false,
        }
    }

    /// Set dry run mode: log commands without executing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set verbose mode: print commands as they execute.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Session target in `user@host` form.
    pub fn target(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Arguments for one ssh invocation running `remote_args` on the target.
    fn ssh_args(&self, remote_args: &[&str]) -> Vec<String> {
        let mut args = vec![
            "-i".to_string(),
            self.keyfile.display().to_string(),
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            "-o".to_string(),
            format!("ConnectionAttempts={}", self.connection_attempts),
            self.target(),
        ];
        args.extend(remote_args.iter().map(|a| a.to_string()));
        args
    }

    /// Run a remote command and report only whether it succeeded.
    fn probe(&self, remote_args: &[&str]) -> Result<bool, ExecuteError> {
        let output = Command::new("ssh").args(self.ssh_args(remote_args)).output()?;
        Ok(output.status.success())
    }

    fn detect_pkg_manager(&self) -> Result<PkgManager, ExecuteError> {
        if self.probe(&["which", "apt-get"])? {
            Ok(PkgManager::Apt)
        } else if self.probe(&["which", "yum"])? {
            Ok(PkgManager::Yum)
        } else {
            Err(ExecuteError::NoPackageManager)
        }
    }
}

impl RemoteShell for SshSession {
    fn execute_privileged(&self, args: &[&str]) -> Result<CmdOutput, ExecuteError> {
        let display = args.join(" ");

        if self.verbose || self.dry_run {
            eprintln!(
                "[{}] {}",
                if self.dry_run { "dry-run" } else { "ssh" },
                display
            );
        }

        if self.dry_run {
            return Ok(CmdOutput {
                stdout: String::new(),
                stderr: String::new(),
                exit_code: 0,
            });
        }

        let mut remote = Vec::with_capacity(args.len() + 1);
        remote.push("sudo");
        remote.extend_from_slice(args);

        let output = Command::new("ssh").args(self.ssh_args(&remote)).output()?;

        if !output.status.success() {
            return Err(ExecuteError::CommandFailedWithStderr {
                cmd: display,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(CmdOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(0),
        })
    }

    fn remove_os_pkg(&self, packages: &[&str]) -> Result<(), ExecuteError> {
        if self.dry_run {
            eprintln!("[dry-run] remove_os_pkg {}", packages.join(" "));
            return Ok(());
        }

        let mut args: Vec<&str> = match self.detect_pkg_manager()? {
            PkgManager::Apt => vec!["apt-get", "remove", "--purge", "-y"],
            PkgManager::Yum => vec!["yum", "remove", "-y"],
        };
        args.extend_from_slice(packages);

        self.execute_privileged(&args)?;
        Ok(())
    }
}

/// Package manager found on the remote host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PkgManager {
    Apt,
    Yum,
}
