use crate::config::TfctlConfig;
use crate::error::DispatchError;
use crate::invocation::Invocation;
use crate::platform::{platform, PlatformOps};
use crate::registry::CommandRegistry;
use anyhow::Result;
use std::path::Path;
use std::process::ExitStatus;

pub struct RunArgs<'a> {
    pub command: Option<&'a str>,
    /// Everything after the command name, unfiltered.
    pub args: &'a [String],
    pub dry_run: bool,
    pub cfg: &'a TfctlConfig,
}

pub fn run(args: RunArgs, registry: &dyn CommandRegistry) -> Result<()> {
    let inv = prepare(args.command, args.args, args.cfg, registry)?;
    let path = inv.script_path(&args.cfg.scripts_dir);
    if args.dry_run {
        println!("{}", render_line(&args.cfg.scripts_dir, &inv));
        return Ok(());
    }
    log::debug!("running {}", render_line(&args.cfg.scripts_dir, &inv));
    // The script's own outcome is not ours to report.
    match launch(platform(), &path, &inv.args) {
        Ok(status) => log::debug!("{} exited with {status}", inv.script),
        Err(e) => log::error!("{}: {e}", path.display()),
    }
    Ok(())
}

/// Validate `command` against the registry and build its invocation.
/// No command means nothing to do, and the registry is not consulted.
pub fn prepare(
    command: Option<&str>,
    args: &[String],
    cfg: &TfctlConfig,
    registry: &dyn CommandRegistry,
) -> Result<Invocation> {
    let Some(command) = command else {
        return Err(DispatchError::MissingCommand.into());
    };
    if !registry.exists(command)? {
        return Err(DispatchError::UnknownCommand(command.to_string()).into());
    }
    let inv = Invocation::build(command, &cfg.suffix, &cfg.self_suffix, args);
    log::debug!("built invocation: {inv}");
    Ok(inv)
}

/// Run the script synchronously with inherited stdio. Retries through `sh`
/// when the platform says the file is not directly executable.
pub fn launch(p: &dyn PlatformOps, path: &Path, args: &[String]) -> std::io::Result<ExitStatus> {
    match p.script_command(path).args(args).status() {
        Ok(status) => Ok(status),
        Err(e) => match p.fallback_command(path, &e) {
            Some(mut cmd) => {
                log::debug!("{} not directly executable ({e}), retrying through sh", path.display());
                cmd.args(args).status()
            }
            None => Err(e),
        },
    }
}

fn render_line(scripts_dir: &Path, inv: &Invocation) -> String {
    format!("{}/{inv}", scripts_dir.display())
}
