//! Parse errors surfaced to the user.

use edutrack_core::ValidationError;
use thiserror::Error;

use crate::Prefix;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Errors produced while turning a command line into a [`Command`](crate::Command).
///
/// Every variant is recoverable: the command is simply not run and the
/// `Display` text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A single-valued prefix was supplied more than once.
    #[error("{}{}", MESSAGE_DUPLICATE_FIELDS, join_prefixes(.0))]
    DuplicatePrefixes(Vec<Prefix>),
    /// A required prefix or positional argument is missing.
    #[error("{}{usage}", MESSAGE_INVALID_COMMAND_FORMAT)]
    MissingField { usage: &'static str },
    /// The only required field of a command was left blank.
    #[error("{message}")]
    BlankField { message: &'static str },
    /// An edit command named no field to change.
    #[error("{}", MESSAGE_NOT_EDITED)]
    NothingToEdit,
    /// The command keyword is not recognized.
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand(String),
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PREFIX_NAME, PREFIX_PHONE};

    #[test]
    fn test_duplicate_prefix_message() {
        let err = ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ p/"
        );
    }

    #[test]
    fn test_missing_field_message_includes_usage() {
        let err = ParseError::MissingField { usage: "delete: INDEX" };
        assert_eq!(err.to_string(), "Invalid command format! \ndelete: INDEX");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = ParseError::from(ValidationError::InvalidIndex);
        assert_eq!(err.to_string(), edutrack_core::MESSAGE_INVALID_INDEX);
    }
}
