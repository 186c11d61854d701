//! Immutable field value objects.
//!
//! Each type wraps one trimmed string that has passed its field's syntax rule
//! and length bound. Values can only be obtained through
//! [`FieldValidators`](crate::FieldValidators) or the `TryFrom` impls (which
//! validate against the default limits), so an existing value is always
//! valid. They serialize as plain strings and re-validate on deserialization.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::{FieldKind, FieldValidators, MESSAGE_INVALID_INDEX, ValidationError, trim_value};

macro_rules! field_value {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Field kind this value belongs to.
            pub const KIND: FieldKind = $kind;

            pub(crate) fn from_validated(value: String) -> Self {
                Self(value)
            }

            /// Returns the wrapped, trimmed text.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the wrapped text is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                FieldValidators::default()
                    .check(Self::KIND, Some(value))
                    .map(Self)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_from(value.as_str())
            }
        }
    };
}

field_value! {
    /// A person's name.
    ///
    /// ```
    /// use edutrack_core::Name;
    ///
    /// let name = Name::try_from("  Rachel Walker ").unwrap();
    /// assert_eq!(name.as_str(), "Rachel Walker");
    /// assert!(Name::try_from("R@chel").is_err());
    /// ```
    Name => FieldKind::Name
}

field_value! {
    /// A phone number; empty when the person has none.
    Phone => FieldKind::Phone
}

field_value! {
    /// A postal address; empty when the person has none.
    Address => FieldKind::Address
}

field_value! {
    /// An email address.
    Email => FieldKind::Email
}

field_value! {
    /// A free-form label attached to a person.
    Tag => FieldKind::Tag
}

field_value! {
    /// A named group (e.g. a tutorial class) a person can belong to.
    Group => FieldKind::Group
}

field_value! {
    /// Free-form note text.
    Note => FieldKind::Note
}

impl Default for Phone {
    fn default() -> Self {
        Self(String::new())
    }
}

impl Default for Address {
    fn default() -> Self {
        Self(String::new())
    }
}

impl Default for Note {
    fn default() -> Self {
        Self(String::new())
    }
}

/// Position of a record in the displayed list.
///
/// Users type one-based indices; collaborators usually want zero-based ones.
/// Serializes as the one-based number.
///
/// # Examples
///
/// ```
/// use edutrack_core::Index;
///
/// let index = Index::parse(" 3 ").unwrap();
/// assert_eq!(index.one_based(), 3);
/// assert_eq!(index.zero_based(), 2);
/// assert!(Index::parse("0").is_err());
/// assert!(Index::parse("+1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for `0`, which is not a valid one-based index.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    /// Parses a one-based index, ignoring surrounding whitespace.
    ///
    /// The trimmed text must be a decimal integer greater than zero that fits
    /// in an `i32`, without a leading sign.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIndex`] otherwise.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = trim_value(raw);
        if trimmed.starts_with('+') {
            return Err(ValidationError::InvalidIndex);
        }
        match trimmed.parse::<i32>() {
            Ok(value) if value > 0 => Ok(Self::from_zero_based(value as usize - 1)),
            _ => Err(ValidationError::InvalidIndex),
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.one_based() as u64)
    }
}

impl<'de> Deserialize<'de> for Index {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let one_based = usize::deserialize(deserializer)?;
        Self::from_one_based(one_based)
            .ok_or_else(|| serde::de::Error::custom(MESSAGE_INVALID_INDEX))
    }
}
