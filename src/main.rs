use anyhow::Result;
use clap::Parser;
use potability::cli::Cli;
use potability::observability::{init_tracing, install_panic_hook};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    install_panic_hook();

    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let status = potability::commands::run(cli)?;
    Ok(status.exit_code())
}
