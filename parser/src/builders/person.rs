//! Builders for commands that create, change or address a person.

use edutrack_core::{FieldValidators, trim_value};

use super::{CommandBuilder, required_index, set_for_edit};
use crate::{
    Command, NewPerson, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_GROUP, PREFIX_NAME, PREFIX_NOTE,
    PREFIX_PHONE, PREFIX_TAG, ParseError, PersonChanges, Prefix, Result, single_valued, tokenize,
};

const PERSON_PREFIXES: [Prefix; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_NOTE,
    PREFIX_TAG,
    PREFIX_GROUP,
];

const ADD_USAGE: &str = "add: Adds a person to the address book. \
     Parameters: n/NAME [p/PHONE] [e/EMAIL] [a/ADDRESS] [nt/NOTE] [t/TAG]... [g/GROUP]...\n\
     Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
     t/friends g/CS2103T";
const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index number \
     used in the displayed person list. Existing values will be overwritten by the input values.\n\
     Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
     [nt/NOTE] [t/TAG]... [g/GROUP]...\n\
     Example: edit 1 p/91234567 e/johndoe@example.com";
const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number used in \
     the displayed person list.\n\
     Parameters: INDEX (must be a positive integer)\n\
     Example: delete 1";
const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified \
     keywords (case-insensitive) and displays them as a list with index numbers.\n\
     Parameters: KEYWORD [MORE_KEYWORDS]...\n\
     Example: find alice bob charlie";
const NOTE_USAGE: &str = "note: Replaces the note of the person identified by the index number \
     used in the displayed person list. An empty note removes it.\n\
     Parameters: INDEX (must be a positive integer) nt/NOTE\n\
     Example: note 1 nt/Prefers email over calls";

pub struct AddBuilder;

impl CommandBuilder for AddBuilder {
    fn keyword(&self) -> &'static str {
        "add"
    }

    fn usage(&self) -> &'static str {
        ADD_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let map = tokenize(args, &PERSON_PREFIXES);
        if !map.are_prefixes_present(&[PREFIX_NAME]) || !trim_value(map.preamble()).is_empty() {
            return Err(ParseError::MissingField { usage: self.usage() });
        }
        map.verify_no_duplicate_prefixes_for(&single_valued(&PERSON_PREFIXES))?;

        let person = NewPerson {
            name: fields.name(map.get_value(PREFIX_NAME))?,
            phone: map
                .get_value(PREFIX_PHONE)
                .map(|raw| fields.phone(raw))
                .transpose()?
                .unwrap_or_default(),
            email: map
                .get_value(PREFIX_EMAIL)
                .map(|raw| fields.email(raw))
                .transpose()?,
            address: map
                .get_value(PREFIX_ADDRESS)
                .map(|raw| fields.address(raw))
                .transpose()?
                .unwrap_or_default(),
            note: map
                .get_value(PREFIX_NOTE)
                .map(|raw| fields.note(raw))
                .transpose()?
                .unwrap_or_default(),
            tags: fields.tags(map.get_all_values(PREFIX_TAG))?,
            groups: fields.groups(map.get_all_values(PREFIX_GROUP))?,
        };

        Ok(Command::Add { person })
    }
}

pub struct EditBuilder;

impl CommandBuilder for EditBuilder {
    fn keyword(&self) -> &'static str {
        "edit"
    }

    fn usage(&self) -> &'static str {
        EDIT_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let map = tokenize(args, &PERSON_PREFIXES);
        let index = required_index(&map, fields, self.usage())?;
        map.verify_no_duplicate_prefixes_for(&single_valued(&PERSON_PREFIXES))?;

        let changes = PersonChanges {
            name: map
                .get_value(PREFIX_NAME)
                .map(|raw| fields.name(raw))
                .transpose()?,
            phone: map
                .get_value(PREFIX_PHONE)
                .map(|raw| fields.phone(raw))
                .transpose()?,
            email: map
                .get_value(PREFIX_EMAIL)
                .map(|raw| fields.email(raw))
                .transpose()?,
            address: map
                .get_value(PREFIX_ADDRESS)
                .map(|raw| fields.address(raw))
                .transpose()?,
            note: map
                .get_value(PREFIX_NOTE)
                .map(|raw| fields.note(raw))
                .transpose()?,
            tags: set_for_edit(map.get_all_values(PREFIX_TAG), |raws| fields.tags(raws))?,
            groups: set_for_edit(map.get_all_values(PREFIX_GROUP), |raws| fields.groups(raws))?,
        };

        if !changes.is_any_field_edited() {
            return Err(ParseError::NothingToEdit);
        }
        Ok(Command::Edit { index, changes })
    }
}

pub struct DeleteBuilder;

impl CommandBuilder for DeleteBuilder {
    fn keyword(&self) -> &'static str {
        "delete"
    }

    fn usage(&self) -> &'static str {
        DELETE_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let map = tokenize(args, &[]);
        let index = required_index(&map, fields, self.usage())?;
        Ok(Command::Delete { index })
    }
}

pub struct FindBuilder;

impl CommandBuilder for FindBuilder {
    fn keyword(&self) -> &'static str {
        "find"
    }

    fn usage(&self) -> &'static str {
        FIND_USAGE
    }

    fn build(&self, args: &str, _fields: &FieldValidators) -> Result<Command> {
        let keywords: Vec<String> = args.split_whitespace().map(String::from).collect();
        if keywords.is_empty() {
            return Err(ParseError::MissingField { usage: self.usage() });
        }
        Ok(Command::Find { keywords })
    }
}

pub struct NoteBuilder;

impl CommandBuilder for NoteBuilder {
    fn keyword(&self) -> &'static str {
        "note"
    }

    fn usage(&self) -> &'static str {
        NOTE_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let map = tokenize(args, &[PREFIX_NOTE]);
        if !map.contains(PREFIX_NOTE) {
            return Err(ParseError::MissingField { usage: self.usage() });
        }
        let index = required_index(&map, fields, self.usage())?;
        map.verify_no_duplicate_prefixes_for(&[PREFIX_NOTE])?;

        let note = fields.note(map.get_value(PREFIX_NOTE))?;
        Ok(Command::Note { index, note })
    }
}
