use crate::cli::Cli;
use crate::command_handlers::{list, run};
use crate::config::TfctlConfig;
use anyhow::Result;

pub fn dispatch(cli: Cli, cfg: &TfctlConfig) -> Result<()> {
    let registry = cfg.registry();
    if cli.list {
        return list::print_commands(registry.as_ref());
    }
    let (command, args) = cli.command_and_args();
    let args = run::RunArgs {
        command,
        args,
        dry_run: cli.dry_run,
        cfg,
    };
    run::run(args, registry.as_ref())
}
