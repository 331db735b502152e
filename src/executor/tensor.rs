//! TensorFlow/deep-learning cleanup.
//!
//! Such instances run Jupyter plus a TensorBoard service, so this routine is
//! the full Jupyter cleanup followed by the TensorBoard teardown.

use crate::session::RemoteShell;

use super::context::Context;
use super::error::ExecuteError;
use super::jupyter;

pub fn clean(shell: &dyn RemoteShell, ctx: &Context) -> Result<(), ExecuteError> {
    jupyter::clean(shell, ctx)?;
    shell.execute_privileged(&["systemctl", "stop", "tensorboard"])?;
    shell.execute_privileged(&["systemctl", "disable", "tensorboard"])?;
    shell.execute_privileged(&["systemctl", "daemon-reload"])?;
    Ok(())
}
