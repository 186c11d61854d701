//! Field validation errors.

use thiserror::Error;

use crate::FieldKind;

/// Message shown when a positional index cannot be parsed.
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Errors produced while turning a raw argument value into a field value.
///
/// The `Display` impl is the user-facing message: syntax failures repeat the
/// field's constraint text verbatim so the user can correct the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required raw value was never supplied to the validator.
    #[error("no value supplied for {field}")]
    NullInput { field: FieldKind },
    /// The trimmed value does not satisfy the field's syntax rule.
    #[error("{message}")]
    Syntax {
        field: FieldKind,
        message: &'static str,
    },
    /// The trimmed value is longer than the field's configured maximum.
    #[error("{} too long (max {max} characters).", .field.length_label())]
    Length { field: FieldKind, max: usize },
    /// A positional index is not a positive integer in range.
    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex,
}

impl ValidationError {
    /// Returns the field this error refers to, if any.
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            Self::NullInput { field } | Self::Syntax { field, .. } | Self::Length { field, .. } => {
                Some(*field)
            }
            Self::InvalidIndex => None,
        }
    }
}
