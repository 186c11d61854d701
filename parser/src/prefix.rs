//! Argument prefixes and the fixed prefix table.
//!
//! A prefix is the literal marker (such as `n/`) that starts a labelled
//! argument. The set of prefixes and the field each one carries is fixed;
//! it is the contract between what users type (and what saved command
//! scripts contain) and the parser, so existing literals must not change.

use std::fmt;

use edutrack_core::FieldKind;
use serde::Serialize;

/// Literal marker identifying an argument's role.
///
/// Equality and hashing are by literal text.
///
/// # Examples
///
/// ```
/// use edutrack_parser::{PREFIX_NAME, Prefix};
///
/// assert_eq!(PREFIX_NAME.as_str(), "n/");
/// assert_eq!(PREFIX_NAME, Prefix::new("n/"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(literal: &'static str) -> Self {
        Self(literal)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns this prefix's entry in [`PREFIX_TABLE`], if it has one.
    pub fn spec(&self) -> Option<&'static PrefixSpec> {
        PREFIX_TABLE.iter().find(|spec| spec.prefix == *self)
    }

    /// Returns `true` if this prefix may be given only once per command.
    ///
    /// Prefixes outside the table are treated as single-valued.
    pub fn is_single_valued(&self) -> bool {
        self.spec()
            .is_none_or(|spec| spec.cardinality == Cardinality::Single)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_NOTE: Prefix = Prefix::new("nt/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_GROUP: Prefix = Prefix::new("g/");

/// How many times a prefix may appear in one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    Single,
    Repeatable,
}

/// Table entry describing one prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixSpec {
    pub prefix: Prefix,
    pub field: FieldKind,
    pub cardinality: Cardinality,
}

/// Every prefix the parser recognizes.
pub static PREFIX_TABLE: [PrefixSpec; 7] = [
    PrefixSpec {
        prefix: PREFIX_NAME,
        field: FieldKind::Name,
        cardinality: Cardinality::Single,
    },
    PrefixSpec {
        prefix: PREFIX_PHONE,
        field: FieldKind::Phone,
        cardinality: Cardinality::Single,
    },
    PrefixSpec {
        prefix: PREFIX_EMAIL,
        field: FieldKind::Email,
        cardinality: Cardinality::Single,
    },
    PrefixSpec {
        prefix: PREFIX_ADDRESS,
        field: FieldKind::Address,
        cardinality: Cardinality::Single,
    },
    PrefixSpec {
        prefix: PREFIX_NOTE,
        field: FieldKind::Note,
        cardinality: Cardinality::Single,
    },
    PrefixSpec {
        prefix: PREFIX_TAG,
        field: FieldKind::Tag,
        cardinality: Cardinality::Repeatable,
    },
    PrefixSpec {
        prefix: PREFIX_GROUP,
        field: FieldKind::Group,
        cardinality: Cardinality::Repeatable,
    },
];

/// Returns the single-valued prefixes among `prefixes`.
pub fn single_valued(prefixes: &[Prefix]) -> Vec<Prefix> {
    prefixes
        .iter()
        .copied()
        .filter(Prefix::is_single_valued)
        .collect()
}
