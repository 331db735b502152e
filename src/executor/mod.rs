//! Cleanup executor - runs ordered teardown routines against a remote instance.

mod context;
mod error;
mod general;
mod jupyter;
mod rstudio;
mod tensor;
mod zeppelin;

pub use context::Context;
pub use error::ExecuteError;

use crate::session::RemoteShell;

/// Application installed on the instance, selecting the specific routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Application {
    Jupyter,
    Zeppelin,
    Rstudio,
    /// TensorFlow or deep-learning instance (Jupyter plus TensorBoard).
    Tensor,
    /// Unrecognized identifier; only general cleanup runs.
    Other,
}

impl Application {
    /// Map the raw `--application` argument onto a routine.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "jupyter" => Self::Jupyter,
            "zeppelin" => Self::Zeppelin,
            "rstudio" => Self::Rstudio,
            "tensor" | "deeplearning" => Self::Tensor,
            _ => Self::Other,
        }
    }
}

/// Cleanup executor bound to one remote session.
///
/// Runs the unconditional general cleanup, then dispatches to the routine
/// selected by the application identifier. The first failed step aborts the
/// whole run; nothing is retried or rolled back.
pub struct Cleaner<'a> {
    shell: &'a dyn RemoteShell,
    ctx: Context,
}

impl<'a> Cleaner<'a> {
    /// Create a cleaner using the given shell and context.
    pub fn new(shell: &'a dyn RemoteShell, ctx: Context) -> Self {
        Self { shell, ctx }
    }

    /// Run general cleanup followed by the routine for `app`.
    pub fn clean(&self, app: Application) -> Result<(), ExecuteError> {
        general::clean(self.shell, &self.ctx)?;

        match app {
            Application::Jupyter => jupyter::clean(self.shell, &self.ctx),
            Application::Zeppelin => zeppelin::clean(self.shell, &self.ctx),
            Application::Rstudio => rstudio::clean(self.shell, &self.ctx),
            Application::Tensor => tensor::clean(self.shell, &self.ctx),
            Application::Other => Ok(()),
        }
    }
}
