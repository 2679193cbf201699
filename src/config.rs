use anyhow::{Context, Result};
use fs_err as fs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::registry::{CommandRegistry, DirectoryRegistry, StaticRegistry};

pub const DEFAULT_CONFIG: &str = "tfctl.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TfctlConfig {
    /// Directory scanned for command scripts, relative to the working directory.
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,
    /// Appended to the command name to form the script filename.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Forwarded tokens ending with this are treated as self-references and dropped.
    #[serde(default = "default_self_suffix")]
    pub self_suffix: String,
    /// Fixed command manifest. When set, the scripts directory is not scanned.
    #[serde(default)]
    pub commands: Option<Vec<String>>,
}

fn default_scripts_dir() -> PathBuf {
    PathBuf::from("./scripts")
}

fn default_suffix() -> String {
    ".sh".to_string()
}

fn default_self_suffix() -> String {
    ".py".to_string()
}

impl Default for TfctlConfig {
    fn default() -> Self {
        TfctlConfig {
            scripts_dir: default_scripts_dir(),
            suffix: default_suffix(),
            self_suffix: default_self_suffix(),
            commands: None,
        }
    }
}

impl TfctlConfig {
    /// Load `path`, or fall back to defaults when no explicit path was given
    /// and ./tfctl.toml does not exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let path = Path::new(explicit.unwrap_or(DEFAULT_CONFIG));
        if explicit.is_none() && !path.exists() {
            log::debug!("no {DEFAULT_CONFIG} found, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Self::parse(&data).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: TfctlConfig = toml::from_str(data)?;
        if cfg.suffix.is_empty() {
            anyhow::bail!("suffix must not be empty");
        }
        Ok(cfg)
    }

    pub fn registry(&self) -> Box<dyn CommandRegistry> {
        match &self.commands {
            Some(names) => Box::new(StaticRegistry::new(names.iter().cloned())),
            None => Box::new(DirectoryRegistry::new(&self.scripts_dir, &self.suffix)),
        }
    }
}
