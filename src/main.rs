use anyhow::Result;
use clap::Parser;
use log::info;
use std::process::ExitCode;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays machine readable with --json
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    info!("Starting nextcloud-admin");

    cli::commands::run(cli).await
}
