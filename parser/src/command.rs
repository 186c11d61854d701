//! Parsed command invocations.
//!
//! A [`Command`] is the fully validated output of the parser, ready to be
//! handed to whatever executes it. It is built in one step at the end of
//! parsing, so a partially valid command never exists.

use std::collections::BTreeSet;

use edutrack_core::{Address, Email, Group, Index, Name, Note, Phone, Tag};
use serde::Serialize;

/// A person to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPerson {
    pub name: Name,
    pub phone: Phone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    pub address: Address,
    pub note: Note,
    pub tags: BTreeSet<Tag>,
    pub groups: BTreeSet<Group>,
}

/// Field changes requested by `edit`.
///
/// `None` leaves the field unchanged. An empty phone, address or note, or an
/// empty tag or group set, clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<BTreeSet<Group>>,
}

impl PersonChanges {
    /// Returns `true` if at least one field would change.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.note.is_some()
            || self.tags.is_some()
            || self.groups.is_some()
    }
}

/// A validated command invocation.
///
/// Serializes with a `command` tag, e.g.
/// `{"command":"group_create","group":"CS2103T"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Add {
        person: NewPerson,
    },
    Edit {
        index: Index,
        changes: PersonChanges,
    },
    Delete {
        index: Index,
    },
    Find {
        keywords: Vec<String>,
    },
    Note {
        index: Index,
        note: Note,
    },
    GroupCreate {
        group: Group,
    },
    GroupDelete {
        group: Group,
    },
    GroupAssign {
        index: Index,
        groups: BTreeSet<Group>,
    },
    GroupUnassign {
        index: Index,
        groups: BTreeSet<Group>,
    },
    TagCreate {
        tags: BTreeSet<Tag>,
    },
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Keyword the command is invoked with (e.g. `"group create"`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Edit { .. } => "edit",
            Command::Delete { .. } => "delete",
            Command::Find { .. } => "find",
            Command::Note { .. } => "note",
            Command::GroupCreate { .. } => "group create",
            Command::GroupDelete { .. } => "group delete",
            Command::GroupAssign { .. } => "group assign",
            Command::GroupUnassign { .. } => "group unassign",
            Command::TagCreate { .. } => "tag create",
            Command::List => "list",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_default_is_unedited() {
        let mut changes = PersonChanges::default();
        assert!(!changes.is_any_field_edited());
        changes.tags = Some(BTreeSet::new());
        assert!(changes.is_any_field_edited());
    }

    #[test]
    fn test_serializes_with_command_tag() {
        let command = Command::GroupCreate {
            group: Group::try_from("CS2103T").unwrap(),
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"command": "group_create", "group": "CS2103T"})
        );

        let json = serde_json::to_value(Command::List).unwrap();
        assert_eq!(json, serde_json::json!({"command": "list"}));
    }

    #[test]
    fn test_unchanged_fields_are_omitted() {
        let command = Command::Edit {
            index: Index::from_zero_based(0),
            changes: PersonChanges {
                phone: Some(Phone::default()),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"command": "edit", "index": 1, "changes": {"phone": ""}})
        );
    }
}
