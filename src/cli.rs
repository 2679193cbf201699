use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "tfctl",
    about = "Run a script from ./scripts by command name, forwarding the remaining arguments"
)]
pub struct Cli {
    /// Path to config (defaults to ./tfctl.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the command scripts (overrides the config file)
    #[arg(long, value_name = "DIR")]
    pub scripts_dir: Option<String>,

    /// Print the available commands and exit
    #[arg(long)]
    pub list: bool,

    /// Print the invocation instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Command name followed by its arguments. Everything after the command
    /// belongs to the script; flags there (leading '-') are dropped, not forwarded.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub argv: Vec<String>,
}

impl Cli {
    /// Split `argv` into the command name and the arguments after it.
    pub fn command_and_args(&self) -> (Option<&str>, &[String]) {
        match self.argv.split_first() {
            Some((command, rest)) => (Some(command.as_str()), rest),
            None => (None, &[][..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn options_before_command_belong_to_tfctl() {
        let cli = parse(&["tfctl", "--dry-run", "--scripts-dir", "s", "deploy", "a"]);
        assert!(cli.dry_run);
        assert_eq!(cli.scripts_dir.as_deref(), Some("s"));
        assert_eq!(cli.command_and_args(), (Some("deploy"), &["a".to_string()][..]));
    }

    #[test]
    fn hyphen_values_after_command_are_captured() {
        let cli = parse(&["tfctl", "deploy", "a", "--force", "-x", "b"]);
        assert!(!cli.dry_run);
        let (command, args) = cli.command_and_args();
        assert_eq!(command, Some("deploy"));
        assert_eq!(args, ["a", "--force", "-x", "b"]);
    }

    #[test]
    fn own_options_after_command_go_to_the_script() {
        let cli = parse(&[
            "tfctl", "deploy", "--list", "--dry-run", "--config", "x", "--scripts-dir", "y", "-h",
            "--version",
        ]);
        assert!(!cli.list);
        assert!(!cli.dry_run);
        assert!(cli.config.is_none());
        assert!(cli.scripts_dir.is_none());
        let (command, args) = cli.command_and_args();
        assert_eq!(command, Some("deploy"));
        assert_eq!(
            args,
            ["--list", "--dry-run", "--config", "x", "--scripts-dir", "y", "-h", "--version"]
        );
    }

    #[test]
    fn flag_directly_after_command_is_captured() {
        for flag in ["--list", "--dry-run", "-h", "--help", "-V"] {
            let cli = parse(&["tfctl", "deploy", flag]);
            assert!(!cli.list && !cli.dry_run, "{flag} parsed as a tfctl option");
            assert_eq!(cli.command_and_args(), (Some("deploy"), &[flag.to_string()][..]));
        }
    }

    #[test]
    fn command_is_optional() {
        let cli = parse(&["tfctl"]);
        assert_eq!(cli.command_and_args(), (None, &[][..]));
    }

    #[test]
    fn list_without_command() {
        let cli = parse(&["tfctl", "--list"]);
        assert!(cli.list);
        assert!(cli.argv.is_empty());
    }
}
