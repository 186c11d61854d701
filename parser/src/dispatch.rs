//! Routing of a full input line to its command builder.

use std::sync::LazyLock;

use edutrack_core::FieldValidators;
use regex::Regex;
use tracing::debug;

use crate::builders::{HELP_USAGE, builder_for};
use crate::{Command, ParseError, Result};

static COMMAND_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<word>\S+)(?P<arguments>(?s:.*))$").expect("static regex must compile")
});

/// Shown when `group` or `tag` is given without an action word.
const GROUP_USAGE: &str = "group: Manages groups.\n\
     Actions: create, delete, assign, unassign\n\
     Example: group create g/CS2103T";
const TAG_USAGE: &str = "tag: Manages tags.\n\
     Actions: create\n\
     Example: tag create t/friends";

/// Splits `input` into its first word and the rest, leading whitespace kept.
fn split_word(input: &str) -> Option<(&str, &str)> {
    let captures = COMMAND_FORMAT.captures(input)?;
    let word = captures.name("word")?.as_str();
    let arguments = captures.name("arguments").map_or("", |m| m.as_str());
    Some((word, arguments))
}

/// Parses complete command lines such as `group create g/CS2103T`.
///
/// Holds the field limits every builder validates against, so one parser
/// can be shared across threads and reused for any number of lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    fields: FieldValidators,
}

impl CommandParser {
    pub fn new(fields: FieldValidators) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &FieldValidators {
        &self.fields
    }

    /// Parses one line of user input into a [`Command`].
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingField`] with the help usage for blank input, or
    ///   with the group/tag usage when the action word is missing.
    /// - [`ParseError::UnknownCommand`] for an unrecognized keyword or action.
    /// - Any error raised by the selected command builder.
    pub fn parse_command(&self, line: &str) -> Result<Command> {
        let Some((word, arguments)) = split_word(line.trim()) else {
            return Err(ParseError::MissingField { usage: HELP_USAGE });
        };

        let (keyword, arguments) = match word {
            "group" | "tag" => {
                let usage = if word == "group" { GROUP_USAGE } else { TAG_USAGE };
                let Some((action, rest)) = split_word(arguments.trim_start()) else {
                    return Err(ParseError::MissingField { usage });
                };
                (format!("{word} {action}"), rest)
            }
            _ => (word.to_string(), arguments),
        };

        let builder =
            builder_for(&keyword).ok_or_else(|| ParseError::UnknownCommand(keyword.clone()))?;
        debug!(keyword = %keyword, arguments, "Dispatching command");
        builder.build(arguments, &self.fields)
    }
}

#[cfg(test)]
mod tests {
    use edutrack_core::{FieldKind, FieldLimits, Index, ValidationError};

    use super::*;
    use crate::builders::MESSAGE_BLANK_GROUP;

    fn parse(line: &str) -> Result<Command> {
        CommandParser::default().parse_command(line)
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("add n/Amy"), Some(("add", " n/Amy")));
        assert_eq!(split_word("list"), Some(("list", "")));
        assert_eq!(split_word("note 1 nt/a\nb"), Some(("note", " 1 nt/a\nb")));
        assert_eq!(split_word(""), None);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse(""), Err(ParseError::MissingField { usage: HELP_USAGE }));
        assert_eq!(parse("   \t"), Err(ParseError::MissingField { usage: HELP_USAGE }));
    }

    #[test]
    fn test_single_word_commands() {
        assert_eq!(parse("list"), Ok(Command::List));
        assert_eq!(parse("  exit  "), Ok(Command::Exit));
        assert_eq!(parse("help me"), Ok(Command::Help));
        assert_eq!(
            parse("delete 4"),
            Ok(Command::Delete {
                index: Index::from_zero_based(3)
            })
        );
    }

    #[test]
    fn test_two_word_commands() {
        assert!(matches!(
            parse("group create g/CS2103T"),
            Ok(Command::GroupCreate { .. })
        ));
        assert!(matches!(
            parse("group   assign 1 g/T01"),
            Ok(Command::GroupAssign { .. })
        ));
        assert!(matches!(
            parse("tag create t/friends"),
            Ok(Command::TagCreate { .. })
        ));
        assert_eq!(
            parse("group create g/"),
            Err(ParseError::BlankField {
                message: MESSAGE_BLANK_GROUP
            })
        );
    }

    #[test]
    fn test_missing_action() {
        assert_eq!(parse("group"), Err(ParseError::MissingField { usage: GROUP_USAGE }));
        assert_eq!(parse("tag  "), Err(ParseError::MissingField { usage: TAG_USAGE }));
    }

    #[test]
    fn test_unknown_keyword_or_action() {
        assert_eq!(
            parse("frobnicate 1"),
            Err(ParseError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(
            parse("group rename g/A"),
            Err(ParseError::UnknownCommand("group rename".to_string()))
        );
        assert_eq!(parse("LIST"), Err(ParseError::UnknownCommand("LIST".to_string())));
    }

    #[test]
    fn test_limits_are_applied() {
        let fields = FieldValidators::new(FieldLimits::default().with(FieldKind::Name, 5));
        let parser = CommandParser::new(fields);
        assert_eq!(
            parser.parse_command("add n/Alexander"),
            Err(ParseError::Validation(ValidationError::Length {
                field: FieldKind::Name,
                max: 5,
            }))
        );
        assert!(parser.parse_command("add n/Alex").is_ok());
    }
}
