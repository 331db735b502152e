//! Jupyter cleanup - service, packages, shared and per-user directories.

use crate::session::RemoteShell;

use super::context::Context;
use super::error::ExecuteError;

/// Per-user dot-directories created by a Jupyter install.
const USER_DIRS: [&str; 4] = [
    ".jupyter/",
    ".ipython/",
    ".ipynb_checkpoints/",
    ".local/share/jupyter/",
];

pub fn clean(shell: &dyn RemoteShell, ctx: &Context) -> Result<(), ExecuteError> {
    shell.execute_privileged(&["systemctl", "stop", "jupyter-notebook"])?;

    // Both Python package-manager variants carry the notebook packages.
    shell.execute_privileged(&["pip2", "uninstall", "-y", "notebook", "jupyter"])?;
    shell.execute_privileged(&["pip3.5", "uninstall", "-y", "notebook", "jupyter"])?;

    shell.execute_privileged(&["rm", "-rf", "/usr/local/share/jupyter/"])?;
    for dir in USER_DIRS {
        shell.execute_privileged(&["rm", "-rf", &ctx.home_path(dir)])?;
    }

    shell.execute_privileged(&["rm", "-f", "/etc/systemd/system/jupyter-notebook.service"])?;
    shell.execute_privileged(&["systemctl", "daemon-reload"])?;
    Ok(())
}
