//! Commands that take no arguments. Anything typed after the keyword is
//! ignored.

use edutrack_core::FieldValidators;

use super::CommandBuilder;
use crate::{Command, Result};

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
const LIST_USAGE: &str = "list: Lists all persons.\nExample: list";
const CLEAR_USAGE: &str = "clear: Clears all entries from the address book.\nExample: clear";
const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";

pub struct ListBuilder;

impl CommandBuilder for ListBuilder {
    fn keyword(&self) -> &'static str {
        "list"
    }

    fn usage(&self) -> &'static str {
        LIST_USAGE
    }

    fn build(&self, _args: &str, _fields: &FieldValidators) -> Result<Command> {
        Ok(Command::List)
    }
}

pub struct ClearBuilder;

impl CommandBuilder for ClearBuilder {
    fn keyword(&self) -> &'static str {
        "clear"
    }

    fn usage(&self) -> &'static str {
        CLEAR_USAGE
    }

    fn build(&self, _args: &str, _fields: &FieldValidators) -> Result<Command> {
        Ok(Command::Clear)
    }
}

pub struct HelpBuilder;

impl CommandBuilder for HelpBuilder {
    fn keyword(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        HELP_USAGE
    }

    fn build(&self, _args: &str, _fields: &FieldValidators) -> Result<Command> {
        Ok(Command::Help)
    }
}

pub struct ExitBuilder;

impl CommandBuilder for ExitBuilder {
    fn keyword(&self) -> &'static str {
        "exit"
    }

    fn usage(&self) -> &'static str {
        EXIT_USAGE
    }

    fn build(&self, _args: &str, _fields: &FieldValidators) -> Result<Command> {
        Ok(Command::Exit)
    }
}
