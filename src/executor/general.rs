//! General cleanup - removes ungit and the Node.js runtime.
//!
//! Runs unconditionally before any application-specific routine.

use crate::session::RemoteShell;

use super::context::Context;
use super::error::ExecuteError;

pub fn clean(shell: &dyn RemoteShell, _ctx: &Context) -> Result<(), ExecuteError> {
    shell.execute_privileged(&["systemctl", "stop", "ungit"])?;
    shell.execute_privileged(&["npm", "-g", "uninstall", "ungit"])?;
    shell.execute_privileged(&["rm", "-f", "/etc/systemd/system/ungit.service"])?;
    shell.execute_privileged(&["systemctl", "daemon-reload"])?;
    shell.remove_os_pkg(&["nodejs", "npm"])?;
    Ok(())
}
