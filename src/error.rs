/// Checked dispatch failures. Both end the process with status 1.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no command given")]
    MissingCommand,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
