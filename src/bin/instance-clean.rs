//! instance-clean CLI - remote teardown of notebook applications.
//!
//! Usage:
//!   instance-clean --hostname <host> --keyfile <key> --os_user <user> --application <app>
//!
//! Runs the general cleanup (ungit, Node.js) and then the routine for the
//! named application. Exits 0 when every step succeeded, 1 on the first
//! failure.

use anyhow::Result;
use clap::Parser;
use instance_clean::{Application, Cleaner, Context, SshSession, output};

#[derive(Parser)]
#[command(name = "instance-clean")]
#[command(about = "Remove notebook applications from a provisioned instance")]
#[command(version)]
struct Cli {
    /// Target instance hostname
    #[arg(long, default_value = "")]
    hostname: String,

    /// Path to the ssh private key for the instance
    // Kept as a String: clap's PathBuf parser rejects the empty default.
    #[arg(long, default_value = "")]
    keyfile: String,

    /// Remote OS user
    #[arg(long = "os_user", default_value = "")]
    os_user: String,

    /// Installed application (jupyter|zeppelin|rstudio|tensor|deeplearning)
    #[arg(long, default_value = "")]
    application: String,

    /// Multiple notebook clusters flag; "true" also tears down Livy on zeppelin
    #[arg(long = "multiple-clusters", env = "notebook_multiple_clusters")]
    multiple_clusters: Option<String>,

    /// Log commands without executing them
    #[arg(long)]
    dry_run: bool,

    /// Print commands as they execute
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    output::action("Configure connections");

    let session = SshSession::new(&cli.hostname, &cli.os_user, &cli.keyfile)
        .dry_run(cli.dry_run)
        .verbose(cli.verbose);
    let ctx = Context::new(&cli.os_user).multiple_clusters(cli.multiple_clusters);

    let cleaner = Cleaner::new(&session, ctx);
    cleaner.clean(Application::from_arg(&cli.application))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
