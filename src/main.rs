#![warn(clippy::pedantic)]

mod check;
mod config;
mod server;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::check::CheckArgs;
use crate::config::ServerConfig;

/// Validates worktime entries for the timesheet form.
#[derive(Debug, Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
struct Command {
    #[command(subcommand)]
    action: Option<Action>,

    #[command(flatten)]
    config: ServerConfig,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Serve the validation API, the default
    Serve(ServerConfig),
    /// Validate a single entry from a JSON file
    Check(CheckArgs),
}

fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run(Command { action, config }: Command) -> anyhow::Result<ExitCode> {
    match action.unwrap_or(Action::Serve(config)) {
        Action::Serve(config) => {
            init_tracing(&config);
            tokio::runtime::Runtime::new()?.block_on(server::serve(config))?;
            Ok(ExitCode::SUCCESS)
        }
        Action::Check(args) => {
            if check::run(args)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let command = Command::parse();
    match run(command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
