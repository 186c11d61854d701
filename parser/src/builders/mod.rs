//! Per-command builders.
//!
//! Each builder declares the prefixes its command accepts, tokenizes the
//! argument string, validates every value and assembles a [`Command`].
//! Builders are stateless; field limits come in through
//! [`FieldValidators`].

mod basic;
mod group;
mod person;
mod tag;

use std::collections::BTreeSet;

use edutrack_core::{FieldValidators, Index, ValidationError, trim_value};

use crate::{ArgumentMultimap, Command, ParseError, Result};

pub use basic::{ClearBuilder, ExitBuilder, HELP_USAGE, HelpBuilder, ListBuilder};
pub use group::{
    GroupAssignBuilder, GroupCreateBuilder, GroupDeleteBuilder, GroupUnassignBuilder,
    MESSAGE_BLANK_GROUP,
};
pub use person::{AddBuilder, DeleteBuilder, EditBuilder, FindBuilder, NoteBuilder};
pub use tag::{MESSAGE_BLANK_TAG, TagCreateBuilder};

/// Turns the arguments of one command keyword into a [`Command`].
pub trait CommandBuilder: Send + Sync {
    /// Keyword this builder handles, e.g. `"add"` or `"group create"`.
    fn keyword(&self) -> &'static str;

    /// Usage text shown when the command is malformed.
    fn usage(&self) -> &'static str;

    /// Parses `args`, everything after the keyword.
    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command>;
}

static BUILDERS: [&dyn CommandBuilder; 14] = [
    &AddBuilder,
    &EditBuilder,
    &DeleteBuilder,
    &FindBuilder,
    &NoteBuilder,
    &GroupCreateBuilder,
    &GroupDeleteBuilder,
    &GroupAssignBuilder,
    &GroupUnassignBuilder,
    &TagCreateBuilder,
    &ListBuilder,
    &ClearBuilder,
    &HelpBuilder,
    &ExitBuilder,
];

/// Returns the builder registered for `keyword`.
pub fn builder_for(keyword: &str) -> Option<&'static dyn CommandBuilder> {
    BUILDERS
        .iter()
        .copied()
        .find(|builder| builder.keyword() == keyword)
}

/// Every registered builder, in registration order.
pub fn builders() -> impl Iterator<Item = &'static dyn CommandBuilder> {
    BUILDERS.iter().copied()
}

/// Parses the preamble as the record index, failing with `usage` when it is
/// blank.
fn required_index(
    map: &ArgumentMultimap,
    fields: &FieldValidators,
    usage: &'static str,
) -> Result<Index> {
    let preamble = trim_value(map.preamble());
    if preamble.is_empty() {
        return Err(ParseError::MissingField { usage });
    }
    Ok(fields.index(preamble)?)
}

/// Parses the values of a repeatable prefix for an edit-style command.
///
/// No values means unchanged; a single blank value means clear the set.
fn set_for_edit<T, F>(raws: &[String], parse: F) -> Result<Option<BTreeSet<T>>>
where
    T: Ord,
    F: FnOnce(&[String]) -> std::result::Result<BTreeSet<T>, ValidationError>,
{
    match raws {
        [] => Ok(None),
        [only] if trim_value(only).is_empty() => Ok(Some(BTreeSet::new())),
        _ => Ok(Some(parse(raws)?)),
    }
}
