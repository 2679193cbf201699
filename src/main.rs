mod cli;
mod command_handlers;
mod config;
mod error;
mod invocation;
mod platform;
mod registry;

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;
use crate::config::TfctlConfig;
use crate::error::DispatchError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::info!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The two checked failures stay quiet unless RUST_LOG asks for them.
            match e.downcast_ref::<DispatchError>() {
                Some(d) => log::info!("{d}"),
                None => log::error!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let mut cfg = TfctlConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.scripts_dir {
        cfg.scripts_dir = dir.into();
    }
    command_handlers::dispatch::dispatch(cli, &cfg)
}
