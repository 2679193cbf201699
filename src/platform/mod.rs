pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait PlatformOps: Sync + Send {
    /// Command that runs the script at `path` directly.
    fn script_command(&self, path: &Path) -> Command;
    /// Command to retry with when `err` says the script could not be executed
    /// as-is (no shebang). `None` means no retry.
    fn fallback_command(&self, path: &Path, err: &io::Error) -> Option<Command>;
}

/// Locate `sh` on PATH, falling back to the conventional location.
pub(crate) fn shell_path() -> PathBuf {
    which::which("sh").unwrap_or_else(|_| PathBuf::from("/bin/sh"))
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(not(unix))]
compile_error!("tfctl launches POSIX shell scripts and only builds for unix targets");
