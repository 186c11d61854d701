use edutrack_core::{FieldValidators, trim_value};

use super::CommandBuilder;
use crate::{Command, PREFIX_TAG, ParseError, Result, tokenize};

pub const MESSAGE_BLANK_TAG: &str = "You have to input a tag name!";

const TAG_CREATE_USAGE: &str = "tag create: Creates one or more tags.\n\
     Parameters: t/TAG [t/TAG]...\n\
     Example: tag create t/friends t/colleagues";

pub struct TagCreateBuilder;

impl CommandBuilder for TagCreateBuilder {
    fn keyword(&self) -> &'static str {
        "tag create"
    }

    fn usage(&self) -> &'static str {
        TAG_CREATE_USAGE
    }

    fn build(&self, args: &str, fields: &FieldValidators) -> Result<Command> {
        let map = tokenize(args, &[PREFIX_TAG]);
        let raws = map.get_all_values(PREFIX_TAG);
        if raws.iter().all(|raw| trim_value(raw).is_empty()) {
            return Err(ParseError::BlankField {
                message: MESSAGE_BLANK_TAG,
            });
        }
        // A blank value next to real tag names is a syntax error, not ignored.
        let tags = fields.tags(raws)?;
        Ok(Command::TagCreate { tags })
    }
}
