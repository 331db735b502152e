//! Remote teardown of notebook applications on provisioned instances.
//!
//! Given a target host, credentials, and an application identifier, the
//! cleaner opens an ssh session and runs an ordered list of destructive
//! commands that remove that application's service, files, and packages.
//! A general cleanup phase (ungit and the Node.js runtime) always runs
//! first, regardless of the selected application.
//!
//! # Example
//!
//! ```no_run
//! use instance_clean::{Application, Cleaner, Context, SshSession};
//!
//! let session = SshSession::new("10.0.0.5", "dlab-user", "/keys/instance.pem");
//! let ctx = Context::new("dlab-user");
//! let cleaner = Cleaner::new(&session, ctx);
//! cleaner.clean(Application::from_arg("jupyter"))?;
//! # Ok::<(), instance_clean::ExecuteError>(())
//! ```
//!
//! Failure semantics are strict: the first command that exits non-zero (or
//! fails to reach the host) aborts the whole run. Nothing is retried and
//! partially applied removals are not rolled back.

mod executor;
pub mod output;
mod session;

pub use executor::{Application, Cleaner, Context, ExecuteError};
pub use session::{CONNECTION_ATTEMPTS, CmdOutput, RemoteShell, SshSession};
