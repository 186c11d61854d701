//! Field kinds and their syntax rules.
//!
//! Every field a command can carry is described by a [`FieldRule`]: a syntax
//! predicate, the constraint text reported when the predicate fails, the
//! label used in length errors and a default maximum length. The rules live
//! in one static table so validation is a single procedure driven by data.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The kinds of field a command argument can carry.
///
/// # Examples
///
/// ```
/// use edutrack_core::FieldKind;
///
/// assert_eq!(FieldKind::Phone.to_string(), "phone");
/// assert_eq!(FieldKind::Phone.rule().default_max_len, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Phone,
    Address,
    Email,
    Tag,
    Group,
    Note,
}

impl FieldKind {
    /// All field kinds, in table order.
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Name,
        FieldKind::Phone,
        FieldKind::Address,
        FieldKind::Email,
        FieldKind::Tag,
        FieldKind::Group,
        FieldKind::Note,
    ];

    /// Returns the syntax rule for this field.
    pub fn rule(self) -> &'static FieldRule {
        &RULES[self as usize]
    }

    /// Label used when reporting an over-long value (e.g. `"Group name"`).
    pub fn length_label(self) -> &'static str {
        self.rule().length_label
    }

    /// Constraint text reported when the syntax rule fails.
    pub fn constraints(self) -> &'static str {
        self.rule().constraints
    }

    fn as_str(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Address => "address",
            FieldKind::Email => "email",
            FieldKind::Tag => "tag",
            FieldKind::Group => "group",
            FieldKind::Note => "note",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntax rule for one field kind.
#[derive(Debug)]
pub struct FieldRule {
    pub kind: FieldKind,
    /// User-facing description of what the field accepts.
    pub constraints: &'static str,
    /// Field label used in length errors.
    pub length_label: &'static str,
    /// Maximum length (in characters) used when no limit is configured.
    pub default_max_len: usize,
    /// Reject a non-empty original value that trims down to nothing, even
    /// though the empty value itself is accepted.
    pub rejects_blank_original: bool,
    predicate: fn(&str) -> bool,
}

impl FieldRule {
    /// Returns `true` if the already-trimmed `value` satisfies the rule.
    pub fn is_valid(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str = "Phone numbers should only contain digits, spaces, hyphens, \
     and an optional '+' prefix. Must have at least 3 digits.";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain \
     and adhere to the following constraints:\n\
     1. The local-part should only contain alphanumeric characters and these special characters, \
     excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
     2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
     separated by periods.\n\
     The domain name must:\n    \
     - end with a domain label at least 2 characters long\n    \
     - have each domain label start and end with alphanumeric characters\n    \
     - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";
pub const TAG_CONSTRAINTS: &str = "Tag names should be alphanumeric";
pub const GROUP_CONSTRAINTS: &str = "Group names should not be blank";
pub const NOTE_CONSTRAINTS: &str = "Notes can take any values";

static RULES: [FieldRule; 7] = [
    FieldRule {
        kind: FieldKind::Name,
        constraints: NAME_CONSTRAINTS,
        length_label: "Name",
        default_max_len: 100,
        rejects_blank_original: false,
        predicate: is_valid_name,
    },
    FieldRule {
        kind: FieldKind::Phone,
        constraints: PHONE_CONSTRAINTS,
        length_label: "Phone number",
        default_max_len: 20,
        rejects_blank_original: false,
        predicate: is_valid_phone,
    },
    FieldRule {
        kind: FieldKind::Address,
        constraints: ADDRESS_CONSTRAINTS,
        length_label: "Address",
        default_max_len: 200,
        rejects_blank_original: true,
        predicate: is_valid_address,
    },
    FieldRule {
        kind: FieldKind::Email,
        constraints: EMAIL_CONSTRAINTS,
        length_label: "Email",
        default_max_len: 100,
        rejects_blank_original: false,
        predicate: is_valid_email,
    },
    FieldRule {
        kind: FieldKind::Tag,
        constraints: TAG_CONSTRAINTS,
        length_label: "Tag",
        default_max_len: 30,
        rejects_blank_original: false,
        predicate: is_valid_tag,
    },
    FieldRule {
        kind: FieldKind::Group,
        constraints: GROUP_CONSTRAINTS,
        length_label: "Group name",
        default_max_len: 50,
        rejects_blank_original: false,
        predicate: is_valid_group,
    },
    FieldRule {
        kind: FieldKind::Note,
        constraints: NOTE_CONSTRAINTS,
        length_label: "Note",
        default_max_len: 500,
        rejects_blank_original: false,
        predicate: is_valid_note,
    },
];

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("static regex must compile"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9 \t\n\x0B\x0C\r-]{2,}$").expect("static regex must compile")
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[[:alnum:]]+(?:[+_.-][[:alnum:]]+)*@(?:[[:alnum:]](?:[[:alnum:]-]*[[:alnum:]])?\.)*[[:alnum:]][[:alnum:]-]*[[:alnum:]]$",
    )
    .expect("static regex must compile")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]]+$").expect("static regex must compile"));

const MIN_PHONE_DIGITS: usize = 3;

/// Strips leading and trailing spaces and ASCII control characters
/// (everything up to U+0020). Non-ASCII whitespace such as U+00A0 is kept.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// The whitespace class used by the field syntax rules: ASCII only.
fn is_pattern_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

// Phone is optional, so the empty value is accepted.
fn is_valid_phone(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    PHONE_RE.is_match(value) && digits >= MIN_PHONE_DIGITS
}

fn is_valid_address(value: &str) -> bool {
    value.is_empty() || !value.starts_with(is_pattern_space)
}

fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn is_valid_tag(value: &str) -> bool {
    TAG_RE.is_match(value)
}

fn is_valid_group(value: &str) -> bool {
    !trim_value(value).is_empty()
}

fn is_valid_note(_value: &str) -> bool {
    true
}
