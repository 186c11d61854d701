use std::collections::BTreeSet;

use edutrack_core::{FieldValidators, Group, Index, trim_value};

use super::{CommandBuilder, required_index};
use crate::{Command, PREFIX_GROUP, ParseError, Result, tokenize};

pub const MESSAGE_BLANK_GROUP: &str = "You have to input a group name!";

const GROUP_CREATE_USAGE: &str = "group create: Creates a new group.\n\
     Parameters: g/GROUP\n\
     Example: group create g/CS2103T";
const GROUP_DELETE_USAGE: &str = "group delete: Deletes an existing group and removes it from \
     every person.\n\
     Parameters: g/GROUP\n\
     Example: group delete g/CS2103T";
const GROUP_ASSIGN_USAGE: &str = "group assign: Adds the person identified by the index number \
     to one or more groups.\n\
     Parameters: INDEX (must be a positive integer) g/GROUP [g/GROUP]...\n\
     Example: group assign 1 g/CS2103T g/T01";
const GROUP_UNASSIGN_USAGE: &str = "group unassign: Removes the person identified by the index \
     number from one or more groups.\n\
     Parameters: INDEX (must be a positive integer) g/GROUP [g/GROUP]...\n\
     Example: group unassign 1 g/T01";

/// Reads the single `g/` value of `group create` and `group delete`.
fn single_group(args: &str, fields: &FieldValidators) -> Result<Group> {
    let map = tokenize(args, &[PREFIX_GROUP]);
    map.verify_no_duplicate_prefixes_for(&[PREFIX_GROUP])?;

    let raw = trim_value(map.get_value(PREFIX_GROUP).unwrap_or_default());
    if raw.is_empty() {
        return Err(ParseError::BlankField {
            message: MESSAGE_BLANK_GROUP,
        });
    }
    Ok(fields.group(raw)?)
}

/// Reads `INDEX g/GROUP...` for `group assign` and `group unassign`.
fn indexed_groups(
    args: &str,
    fields: &FieldValidators,
    usage: &'static str,
) -> Result<(Index, BTreeSet<Group>)> {
    let map = tokenize(args, &[PREFIX_GROUP]);
    if !map.contains(PREFIX_GROUP) {
        return Err(ParseError::MissingField { usage });
    }
    let index = required_index(&map, fields, usage)?;
    let groups = fields.groups(map.get_all_values(PREFIX_GROUP))?;
    Ok((index, groups))
}

pub struct GroupCreateBuilder;

impl CommandBuilder for GroupCreateBuilder {
    fn keyword(&self) -> &'static str {
        "group create"
    }

    fn usage(&self) -> &'static str {
        GROUP_CREATE_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let group = single_group(args, fields)?;
        Ok(Command::GroupCreate { group })
    }
}

pub struct GroupDeleteBuilder;

impl CommandBuilder for GroupDeleteBuilder {
    fn keyword(&self) -> &'static str {
        "group delete"
    }

    fn usage(&self) -> &'static str {
        GROUP_DELETE_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let group = single_group(args, fields)?;
        Ok(Command::GroupDelete { group })
    }
}

pub struct GroupAssignBuilder;

impl CommandBuilder for GroupAssignBuilder {
    fn keyword(&self) -> &'static str {
        "group assign"
    }

    fn usage(&self) -> &'static str {
        GROUP_ASSIGN_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let (index, groups) = indexed_groups(args, fields, self.usage())?;
        Ok(Command::GroupAssign { index, groups })
    }
}

pub struct GroupUnassignBuilder;

impl CommandBuilder for GroupUnassignBuilder {
    fn keyword(&self) -> &'static str {
        "group unassign"
    }

    fn usage(&self) -> &'static str {
        GROUP_UNASSIGN_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let (index, groups) = indexed_groups(args, fields, self.usage())?;
        Ok(Command::GroupUnassign { index, groups })
    }
}
