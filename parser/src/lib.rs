//! Command-line parsing for EduTrack.
//!
//! A command line goes through four stages:
//!
//! 1. [`CommandParser`] splits off the command keyword (`add`, `group
//!    create`, ...) and picks the matching [`CommandBuilder`].
//! 2. [`tokenize`] segments the remaining arguments by [`Prefix`] into an
//!    [`ArgumentMultimap`], leaving every value untrimmed.
//! 3. The builder checks required and duplicated prefixes and runs each raw
//!    value through its field validator.
//! 4. The validated values are assembled into a [`Command`].
//!
//! Any failure stops the pipeline with a [`ParseError`] whose `Display`
//! text is meant for the user.
//!
//! # Example
//!
//! ```
//! use edutrack_parser::{Command, CommandParser};
//!
//! let parser = CommandParser::default();
//! match parser.parse_command("add n/Rachel Walker p/123456 t/friend").unwrap() {
//!     Command::Add { person } => {
//!         assert_eq!(person.name.as_str(), "Rachel Walker");
//!         assert_eq!(person.phone.as_str(), "123456");
//!     }
//!     other => panic!("unexpected command {other:?}"),
//! }
//!
//! let err = parser.parse_command("group create g/").unwrap_err();
//! assert_eq!(err.to_string(), "You have to input a group name!");
//! ```

pub mod builders;
mod command;
mod dispatch;
mod error;
mod multimap;
mod prefix;
mod tokenizer;

pub use builders::{CommandBuilder, builder_for, builders};
pub use command::{Command, NewPerson, PersonChanges};
pub use dispatch::CommandParser;
pub use error::{
    MESSAGE_DUPLICATE_FIELDS, MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_NOT_EDITED,
    MESSAGE_UNKNOWN_COMMAND, ParseError, Result,
};
pub use multimap::ArgumentMultimap;
pub use prefix::{
    Cardinality, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_GROUP, PREFIX_NAME, PREFIX_NOTE,
    PREFIX_PHONE, PREFIX_TABLE, PREFIX_TAG, Prefix, PrefixSpec, single_valued,
};
pub use tokenizer::tokenize;
