mod cli;

use smally::{actions, config};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use smally::config::ActionConfig;
use std::io;
use std::process::ExitCode;
use std::time::SystemTime;

fn main() -> ExitCode {
    // clap reports usage errors with status 2; every validation failure here exits 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            // Best effort: if stderr is gone there is nowhere left to report to.
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "smally=trace,smally_tools=debug,smally_common=debug".to_string()
        } else {
            "smally=info,smally_tools=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("smally: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let action_config = ActionConfig::try_from(cli.action_options())?;
    let settings = config::load_config_or_default(cli.config.as_deref())?;
    let action = actions::prepare(&action_config, &settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = actions::run(&action_config, action.as_ref(), SystemTime::now(), &mut out)
        .context("Failed to write report")?;

    if summary.has_failures() {
        tracing::warn!("{} file(s) failed", summary.failed);
    }

    Ok(())
}
