use crate::platform::{shell_path, PlatformOps};
use nix::errno::Errno;
use std::io;
use std::path::Path;
use std::process::Command;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn script_command(&self, path: &Path) -> Command {
        Command::new(path)
    }
    fn fallback_command(&self, path: &Path, err: &io::Error) -> Option<Command> {
        if err.raw_os_error() != Some(Errno::ENOEXEC as i32) {
            return None;
        }
        let mut cmd = Command::new(shell_path());
        cmd.arg(path);
        Some(cmd)
    }
}
