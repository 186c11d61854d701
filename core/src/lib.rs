//! Field value objects and validation for EduTrack command input.
//!
//! This crate defines the typed values a command line is parsed into and the
//! rules they obey:
//!
//! - [`FieldKind`] / [`FieldRule`]: the static table of per-field syntax
//!   rules, constraint messages and default length limits.
//! - [`FieldLimits`]: the configurable maximum length of every field.
//! - [`FieldValidators`]: one trim/syntax/length procedure instantiated for
//!   every field kind, plus batch validation for tag and group sets.
//! - [`Name`], [`Phone`], [`Address`], [`Email`], [`Tag`], [`Group`],
//!   [`Note`]: immutable value objects that only exist in a valid state.
//! - [`Index`]: a one-based record position.
//!
//! # Example
//!
//! ```
//! use edutrack_core::*;
//!
//! let fields = FieldValidators::new(FieldLimits::default());
//! let name = fields.name("  Rachel Walker ").unwrap();
//! assert_eq!(name.as_str(), "Rachel Walker");
//!
//! let tags = fields.tags(["friend", "friend", "neighbour"]).unwrap();
//! assert_eq!(tags.len(), 2);
//!
//! let err = fields.name("R@chel").unwrap_err();
//! assert_eq!(err.to_string(), FieldKind::Name.constraints());
//! ```

mod error;
mod field;
mod limits;
mod validate;
mod values;

pub use error::{MESSAGE_INVALID_INDEX, ValidationError};
pub use field::{
    ADDRESS_CONSTRAINTS, EMAIL_CONSTRAINTS, FieldKind, FieldRule, GROUP_CONSTRAINTS,
    NAME_CONSTRAINTS, NOTE_CONSTRAINTS, PHONE_CONSTRAINTS, TAG_CONSTRAINTS, trim_value,
};
pub use limits::FieldLimits;
pub use validate::FieldValidators;
pub use values::{Address, Email, Group, Index, Name, Note, Phone, Tag};
