use crate::command::ActionKind;

/// Validation and lookup errors raised by the command repository side.
///
/// A malformed record is reported through one of these and excluded from
/// matching; it never aborts a match pass or a batch load.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("command has no trigger phrases")]
    NoTriggers,

    #[error("action '{0}' requires a target")]
    MissingTarget(ActionKind),

    #[error("custom action requires a function name")]
    MissingFunctionName,

    #[error("unknown action kind: '{0}'")]
    UnknownAction(String),

    #[error("no command with id {0}")]
    UnknownId(i64),

    /// The command listing itself could not be parsed.
    #[error("malformed command listing: {0}")]
    Parse(String),
}

/// Errors raised while dispatching a matched command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    /// The custom function identifier is not present in the registry.
    /// Unresolved identifiers are reported, never evaluated as code.
    #[error("unknown custom function: '{0}'")]
    UnknownFunction(String),

    /// The dispatcher or a registered handler failed.
    #[error("dispatch failed: {0}")]
    Failed(String),
}
