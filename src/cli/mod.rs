use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

pub mod qa;
pub mod render;
mod session;

pub use render::OutputFormat;
pub use session::{InputClosed, Session};

/// Pennywise - Personal Finance Tracker
#[derive(Parser, Debug)]
#[command(name = "pennywise")]
#[command(about = "Record income and expenses, check your balance, and summarize spending")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for summary and spending reports
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl Cli {
    /// Start an interactive session on stdin/stdout.
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);
        tracing::debug!(format = ?self.format, "starting session");

        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout(), self.format);
        session.run()
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "pennywise=debug"
    } else {
        "pennywise=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
