use std::fmt;
use std::path::{Path, PathBuf};

/// A validated command plus the arguments that survive filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub script: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Forward every argument except flags (leading '-'), tokens ending in
    /// `self_suffix` and repeats of the command name. Order is preserved.
    pub fn build<'a, I>(command: &str, suffix: &str, self_suffix: &str, args: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let args = args
            .into_iter()
            .filter(|a| forwarded(a, command, self_suffix))
            .cloned()
            .collect();
        Invocation { script: format!("{command}{suffix}"), args }
    }

    pub fn script_path(&self, scripts_dir: &Path) -> PathBuf {
        scripts_dir.join(&self.script)
    }
}

fn forwarded(arg: &str, command: &str, self_suffix: &str) -> bool {
    if arg.starts_with('-') {
        return false;
    }
    if !self_suffix.is_empty() && arg.ends_with(self_suffix) {
        return false;
    }
    arg != command
}

/// Shell-line rendering: `X.sh 'a' 'b'`. Quotes inside arguments are not escaped.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.script)?;
        for arg in &self.args {
            write!(f, " '{arg}'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(command: &str, args: &[&str]) -> Invocation {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Invocation::build(command, ".sh", ".py", &owned)
    }

    #[test]
    fn plain_arguments_are_quoted_in_order() {
        let inv = build("deploy", &["a", "b"]);
        assert_eq!(inv.to_string(), "deploy.sh 'a' 'b'");
        assert_eq!(inv.args, vec!["a", "b"]);
    }

    #[test]
    fn no_arguments_renders_bare_script() {
        assert_eq!(build("logs", &[]).to_string(), "logs.sh");
    }

    #[test]
    fn flags_are_dropped_anywhere() {
        let inv = build("deploy", &["-f", "a", "--verbose", "b", "-"]);
        assert_eq!(inv.args, vec!["a", "b"]);
    }

    #[test]
    fn command_name_and_self_references_are_dropped() {
        let inv = build("deploy", &["deploy", "x", "tfctl.py", "deploy", "y.py", "z"]);
        assert_eq!(inv.to_string(), "deploy.sh 'x' 'z'");
    }

    #[test]
    fn arguments_with_spaces_stay_single_tokens() {
        let inv = build("echo", &["hello world", ""]);
        assert_eq!(inv.args, vec!["hello world", ""]);
        assert_eq!(inv.to_string(), "echo.sh 'hello world' ''");
    }

    #[test]
    fn script_path_joins_dir() {
        let inv = build("deploy", &[]);
        assert_eq!(inv.script_path(Path::new("./scripts")), Path::new("./scripts/deploy.sh"));
    }

    #[test]
    fn building_twice_is_identical() {
        assert_eq!(build("d", &["a", "-b", "c"]), build("d", &["a", "-b", "c"]));
    }
}
