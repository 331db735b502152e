//! Integration tests for cleanup dispatch and ordering.
//!
//! These drive the `Cleaner` against a recording `RemoteShell` so the exact
//! command sequences can be asserted without a live instance.

use std::cell::RefCell;

use instance_clean::{Application, Cleaner, CmdOutput, Context, ExecuteError, RemoteShell};

/// Records every collaborator call; optionally fails the call at `fail_on`.
struct RecordingShell {
    log: RefCell<Vec<String>>,
    fail_on: Option<usize>,
}

impl RecordingShell {
    fn new() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Fail the `index`-th call (zero-based) with a non-zero exit.
    fn failing_at(index: usize) -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            fail_on: Some(index),
        }
    }

    fn record(&self, entry: String) -> Result<(), ExecuteError> {
        let mut log = self.log.borrow_mut();
        let index = log.len();
        log.push(entry.clone());

        if self.fail_on == Some(index) {
            return Err(ExecuteError::CommandFailed {
                cmd: entry,
                code: Some(1),
            });
        }
        Ok(())
    }

    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl RemoteShell for RecordingShell {
    fn execute_privileged(&self, args: &[&str]) -> Result<CmdOutput, ExecuteError> {
        self.record(args.join(" "))?;
        Ok(CmdOutput {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
        })
    }

    fn remove_os_pkg(&self, packages: &[&str]) -> Result<(), ExecuteError> {
        self.record(format!("remove_os_pkg {}", packages.join(" ")))
    }
}

const GENERAL: [&str; 5] = [
    "systemctl stop ungit",
    "npm -g uninstall ungit",
    "rm -f /etc/systemd/system/ungit.service",
    "systemctl daemon-reload",
    "remove_os_pkg nodejs npm",
];

fn jupyter_commands(user: &str) -> Vec<String> {
    vec![
        "systemctl stop jupyter-notebook".to_string(),
        "pip2 uninstall -y notebook jupyter".to_string(),
        "pip3.5 uninstall -y notebook jupyter".to_string(),
        "rm -rf /usr/local/share/jupyter/".to_string(),
        format!("rm -rf /home/{user}/.jupyter/"),
        format!("rm -rf /home/{user}/.ipython/"),
        format!("rm -rf /home/{user}/.ipynb_checkpoints/"),
        format!("rm -rf /home/{user}/.local/share/jupyter/"),
        "rm -f /etc/systemd/system/jupyter-notebook.service".to_string(),
        "systemctl daemon-reload".to_string(),
    ]
}

#[test]
fn jupyter_runs_general_then_jupyter_commands() {
    let shell = RecordingShell::new();
    let cleaner = Cleaner::new(&shell, Context::new("dlab-user"));

    cleaner.clean(Application::Jupyter).unwrap();

    let mut expected: Vec<String> = GENERAL.iter().map(|c| c.to_string()).collect();
    expected.extend(jupyter_commands("dlab-user"));
    assert_eq!(shell.log(), expected);
}

#[test]
fn unknown_application_runs_only_general_cleanup() {
    let shell = RecordingShell::new();
    let cleaner = Cleaner::new(&shell, Context::new("dlab-user"));

    cleaner.clean(Application::from_arg("superset")).unwrap();

    let expected: Vec<String> = GENERAL.iter().map(|c| c.to_string()).collect();
    assert_eq!(shell.log(), expected);
}

#[test]
fn zeppelin_without_multiple_clusters_skips_livy() {
    let shell = RecordingShell::new();
    // Flag unset behaves as disabled.
    let cleaner = Cleaner::new(&shell, Context::new("dlab-user"));

    cleaner.clean(Application::Zeppelin).unwrap();

    let log = shell.log();
    assert_eq!(log.len(), GENERAL.len() + 4);
    assert_eq!(
        &log[GENERAL.len()..],
        [
            "systemctl stop zeppelin-notebook",
            "rm -rf /opt/zeppelin* /var/log/zeppelin /var/run/zeppelin",
            "rm -f /etc/systemd/system/zeppelin-notebook.service",
            "systemctl daemon-reload",
        ]
    );
    assert!(!log.iter().any(|c| c.contains("livy")));
}

#[test]
fn zeppelin_with_multiple_clusters_tears_down_livy() {
    let shell = RecordingShell::new();
    let ctx = Context::new("dlab-user").multiple_clusters(Some("true".into()));
    let cleaner = Cleaner::new(&shell, ctx);

    cleaner.clean(Application::Zeppelin).unwrap();

    let log = shell.log();
    assert_eq!(
        &log[GENERAL.len()..],
        [
            "systemctl stop zeppelin-notebook",
            "rm -rf /opt/zeppelin* /var/log/zeppelin /var/run/zeppelin",
            "systemctl stop livy-server",
            "rm -rf /opt/livy* /var/run/livy",
            "rm -f /etc/systemd/system/livy-server.service",
            "rm -f /etc/systemd/system/zeppelin-notebook.service",
            "systemctl daemon-reload",
        ]
    );
}

#[test]
fn zeppelin_with_flag_false_skips_livy() {
    let shell = RecordingShell::new();
    let ctx = Context::new("dlab-user").multiple_clusters(Some("false".into()));
    let cleaner = Cleaner::new(&shell, ctx);

    cleaner.clean(Application::Zeppelin).unwrap();
    assert!(!shell.log().iter().any(|c| c.contains("livy")));
}

#[test]
fn rstudio_removes_package_then_user_config() {
    let shell = RecordingShell::new();
    let cleaner = Cleaner::new(&shell, Context::new("ruser"));

    cleaner.clean(Application::Rstudio).unwrap();

    let log = shell.log();
    assert_eq!(
        &log[GENERAL.len()..],
        [
            "remove_os_pkg rstudio-server",
            "rm -f /home/ruser/.Rprofile",
            "rm -f /home/ruser/.Renviron",
        ]
    );
}

#[test]
fn tensor_runs_full_jupyter_sequence_first() {
    let shell = RecordingShell::new();
    let cleaner = Cleaner::new(&shell, Context::new("dlab-user"));

    cleaner.clean(Application::from_arg("deeplearning")).unwrap();

    let log = shell.log();
    let mut expected: Vec<String> = GENERAL.iter().map(|c| c.to_string()).collect();
    expected.extend(jupyter_commands("dlab-user"));
    expected.extend([
        "systemctl stop tensorboard".to_string(),
        "systemctl disable tensorboard".to_string(),
        "systemctl daemon-reload".to_string(),
    ]);
    assert_eq!(log, expected);
}

#[test]
fn failure_in_general_cleanup_aborts_before_specific_routine() {
    // Second general command fails; nothing after it may run.
    let shell = RecordingShell::failing_at(1);
    let cleaner = Cleaner::new(&shell, Context::new("dlab-user"));

    let err = cleaner.clean(Application::Jupyter).unwrap_err();
    assert!(err.to_string().contains("npm -g uninstall ungit"));

    let log = shell.log();
    assert_eq!(log.len(), 2);
    assert!(!log.iter().any(|c| c.contains("jupyter")));
}

#[test]
fn failure_mid_routine_stops_remaining_commands() {
    // Fail the pip3.5 uninstall (call 7: five general + two jupyter before it).
    let shell = RecordingShell::failing_at(7);
    let cleaner = Cleaner::new(&shell, Context::new("dlab-user"));

    let err = cleaner.clean(Application::Jupyter).unwrap_err();
    assert!(err.to_string().contains("pip3.5"));

    let log = shell.log();
    assert_eq!(log.len(), 8);
    assert!(!log.iter().any(|c| c.contains(".jupyter")));
}

#[test]
fn rstudio_package_removal_failure_skips_dotfile_removals() {
    // remove_os_pkg is the sixth call overall.
    let shell = RecordingShell::failing_at(5);
    let cleaner = Cleaner::new(&shell, Context::new("ruser"));

    let err = cleaner.clean(Application::Rstudio).unwrap_err();
    assert!(err.to_string().contains("rstudio-server"));

    let log = shell.log();
    assert_eq!(log.len(), 6);
    assert_eq!(log[5], "remove_os_pkg rstudio-server");
    assert!(!log.iter().any(|c| c.contains(".Rprofile")));
    assert!(!log.iter().any(|c| c.contains(".Renviron")));
}
