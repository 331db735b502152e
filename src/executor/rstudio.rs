//! RStudio cleanup - server package and per-user R configuration.

use crate::session::RemoteShell;

use super::context::Context;
use super::error::ExecuteError;

pub fn clean(shell: &dyn RemoteShell, ctx: &Context) -> Result<(), ExecuteError> {
    shell.remove_os_pkg(&["rstudio-server"])?;
    shell.execute_privileged(&["rm", "-f", &ctx.home_path(".Rprofile")])?;
    shell.execute_privileged(&["rm", "-f", &ctx.home_path(".Renviron")])?;
    Ok(())
}
