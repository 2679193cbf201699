use anyhow::{Context, Result};
use fs_err as fs;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Source of the command names tfctl accepts.
pub trait CommandRegistry {
    fn list(&self) -> Result<BTreeSet<String>>;

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.contains(name))
    }
}

/// Scans a directory on every call. Each entry name loses as many trailing
/// characters as the suffix has, whether or not it actually ends with it.
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    dir: PathBuf,
    suffix_len: usize,
}

impl DirectoryRegistry {
    pub fn new(dir: impl AsRef<Path>, suffix: &str) -> Self {
        DirectoryRegistry {
            dir: dir.as_ref().to_path_buf(),
            suffix_len: suffix.chars().count(),
        }
    }
}

impl CommandRegistry for DirectoryRegistry {
    fn list(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry.with_context(|| format!("listing {}", self.dir.display()))?;
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                log::debug!("skipping non UTF-8 entry {:?}", entry.path());
                continue;
            };
            names.insert(strip_trailing(&file_name, self.suffix_len));
        }
        log::debug!("{} command(s) in {}", names.len(), self.dir.display());
        Ok(names)
    }
}

/// Fixed manifest from tfctl.toml.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    names: BTreeSet<String>,
}

impl StaticRegistry {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        StaticRegistry { names: names.into_iter().collect() }
    }
}

impl CommandRegistry for StaticRegistry {
    fn list(&self) -> Result<BTreeSet<String>> {
        Ok(self.names.clone())
    }

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.names.contains(name))
    }
}

fn strip_trailing(name: &str, n: usize) -> String {
    let keep = name.chars().count().saturating_sub(n);
    name.chars().take(keep).collect()
}
