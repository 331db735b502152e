//! Zeppelin cleanup - service, directories, and the optional Livy job server.

use crate::session::RemoteShell;

use super::context::Context;
use super::error::ExecuteError;

pub fn clean(shell: &dyn RemoteShell, ctx: &Context) -> Result<(), ExecuteError> {
    shell.execute_privileged(&["systemctl", "stop", "zeppelin-notebook"])?;

    // The remote shell expands the /opt globs.
    shell.execute_privileged(&[
        "rm",
        "-rf",
        "/opt/zeppelin*",
        "/var/log/zeppelin",
        "/var/run/zeppelin",
    ])?;

    if ctx.multiple_clusters_enabled() {
        shell.execute_privileged(&["systemctl", "stop", "livy-server"])?;
        shell.execute_privileged(&["rm", "-rf", "/opt/livy*", "/var/run/livy"])?;
        shell.execute_privileged(&["rm", "-f", "/etc/systemd/system/livy-server.service"])?;
    }

    shell.execute_privileged(&["rm", "-f", "/etc/systemd/system/zeppelin-notebook.service"])?;
    shell.execute_privileged(&["systemctl", "daemon-reload"])?;
    Ok(())
}
