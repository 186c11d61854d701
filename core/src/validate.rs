//! Field validation.
//!
//! [`FieldValidators`] runs one procedure for every field kind:
//!
//! 1. an absent value is a [`ValidationError::NullInput`];
//! 2. the value is trimmed (a whitespace-only address is rejected here, while
//!    a truly empty address is accepted);
//! 3. the trimmed value must satisfy the field's [`FieldRule`](crate::FieldRule);
//! 4. the trimmed value must not exceed the configured maximum length;
//! 5. the value object is built around the trimmed text.
//!
//! # Examples
//!
//! ```
//! use edutrack_core::*;
//!
//! let fields = FieldValidators::default();
//! assert_eq!(fields.address(" 123 Main St ").unwrap().as_str(), "123 Main St");
//! assert!(fields.address("").unwrap().is_empty());
//! assert!(fields.address("   ").is_err());
//!
//! let err = fields.phone("1".repeat(21).as_str()).unwrap_err();
//! assert_eq!(err.to_string(), "Phone number too long (max 20 characters).");
//! ```

use std::collections::BTreeSet;

use crate::{
    Address, Email, FieldKind, FieldLimits, Group, Index, Name, Note, Phone, Tag, ValidationError,
    trim_value,
};

/// The validator set, parameterised by an immutable [`FieldLimits`] table.
///
/// Validators are pure; a single instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidators {
    limits: FieldLimits,
}

impl FieldValidators {
    pub fn new(limits: FieldLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &FieldLimits {
        &self.limits
    }

    /// Validates `raw` against the rule and limit for `kind`, returning the
    /// trimmed text.
    ///
    /// # Errors
    ///
    /// See the module documentation for the order in which checks apply.
    pub fn check(&self, kind: FieldKind, raw: Option<&str>) -> Result<String, ValidationError> {
        let raw = raw.ok_or(ValidationError::NullInput { field: kind })?;
        let rule = kind.rule();
        let trimmed = trim_value(raw);

        let syntax_error = ValidationError::Syntax {
            field: kind,
            message: rule.constraints,
        };
        if rule.rejects_blank_original && !raw.is_empty() && trimmed.is_empty() {
            return Err(syntax_error);
        }
        if !rule.is_valid(trimmed) {
            return Err(syntax_error);
        }

        let max = self.limits.max_len(kind);
        if trimmed.chars().count() > max {
            return Err(ValidationError::Length { field: kind, max });
        }

        Ok(trimmed.to_string())
    }

    pub fn name<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<Name, ValidationError> {
        self.check(Name::KIND, raw.into()).map(Name::from_validated)
    }

    pub fn phone<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<Phone, ValidationError> {
        self.check(Phone::KIND, raw.into()).map(Phone::from_validated)
    }

    /// Validates an address.
    ///
    /// `""` is a valid empty address, but `"   "` is rejected.
    pub fn address<'a>(
        &self,
        raw: impl Into<Option<&'a str>>,
    ) -> Result<Address, ValidationError> {
        self.check(Address::KIND, raw.into())
            .map(Address::from_validated)
    }

    pub fn email<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<Email, ValidationError> {
        self.check(Email::KIND, raw.into()).map(Email::from_validated)
    }

    pub fn tag<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<Tag, ValidationError> {
        self.check(Tag::KIND, raw.into()).map(Tag::from_validated)
    }

    pub fn group<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<Group, ValidationError> {
        self.check(Group::KIND, raw.into()).map(Group::from_validated)
    }

    pub fn note<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<Note, ValidationError> {
        self.check(Note::KIND, raw.into()).map(Note::from_validated)
    }

    /// Validates every tag, stopping at the first invalid one.
    ///
    /// Duplicate tags collapse into one entry.
    pub fn tags<I, S>(&self, raws: I) -> Result<BTreeSet<Tag>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raws.into_iter().map(|raw| self.tag(raw.as_ref())).collect()
    }

    /// Validates every group, stopping at the first invalid one.
    ///
    /// Duplicate groups collapse into one entry.
    pub fn groups<I, S>(&self, raws: I) -> Result<BTreeSet<Group>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raws.into_iter().map(|raw| self.group(raw.as_ref())).collect()
    }

    pub fn index(&self, raw: &str) -> Result<Index, ValidationError> {
        Index::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{NAME_CONSTRAINTS, PHONE_CONSTRAINTS};

    const INVALID_NAME: &str = "R@chel";
    const INVALID_PHONE: &str = "+1";
    const INVALID_ADDRESS: &str = " ";
    const INVALID_EMAIL: &str = "example.com";
    const INVALID_TAG: &str = "#friend";
    const INVALID_GROUP: &str = "";

    const VALID_NAME: &str = "Rachel Walker";
    const VALID_PHONE: &str = "123456";
    const VALID_ADDRESS: &str = "123 Main Street #0505";
    const VALID_EMAIL: &str = "rachel@example.com";
    const VALID_TAG_1: &str = "friend";
    const VALID_TAG_2: &str = "neighbour";
    const VALID_GROUP_1: &str = "CS2103T";
    const VALID_GROUP_2: &str = "Tutorial-01";

    const WHITESPACE: &str = " \t\r\n";

    fn fields() -> FieldValidators {
        FieldValidators::default()
    }

    fn padded(value: &str) -> String {
        format!("{WHITESPACE}{value}{WHITESPACE}")
    }

    #[test]
    fn test_absent_value_is_null_input() {
        assert_eq!(
            fields().name(None::<&str>),
            Err(ValidationError::NullInput {
                field: FieldKind::Name
            })
        );
        assert!(matches!(
            fields().tag(None::<&str>),
            Err(ValidationError::NullInput { .. })
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let fields = fields();
        assert_eq!(
            fields.name(INVALID_NAME),
            Err(ValidationError::Syntax {
                field: FieldKind::Name,
                message: NAME_CONSTRAINTS
            })
        );
        assert_eq!(
            fields.phone(INVALID_PHONE).unwrap_err().to_string(),
            PHONE_CONSTRAINTS
        );
        assert!(fields.address(INVALID_ADDRESS).is_err());
        assert!(fields.email(INVALID_EMAIL).is_err());
        assert!(fields.tag(INVALID_TAG).is_err());
        assert!(fields.group(INVALID_GROUP).is_err());
    }

    #[test]
    fn test_valid_values_without_whitespace() {
        let fields = fields();
        assert_eq!(fields.name(VALID_NAME).unwrap().as_str(), VALID_NAME);
        assert_eq!(fields.phone(VALID_PHONE).unwrap().as_str(), VALID_PHONE);
        assert_eq!(fields.address(VALID_ADDRESS).unwrap().as_str(), VALID_ADDRESS);
        assert_eq!(fields.email(VALID_EMAIL).unwrap().as_str(), VALID_EMAIL);
        assert_eq!(fields.tag(VALID_TAG_1).unwrap().as_str(), VALID_TAG_1);
        assert_eq!(fields.group(VALID_GROUP_1).unwrap().as_str(), VALID_GROUP_1);
    }

    #[test]
    fn test_valid_values_with_whitespace_are_trimmed() {
        let fields = fields();
        assert_eq!(fields.name(padded(VALID_NAME).as_str()).unwrap().as_str(), VALID_NAME);
        assert_eq!(fields.phone(padded(VALID_PHONE).as_str()).unwrap().as_str(), VALID_PHONE);
        assert_eq!(
            fields.address(padded(VALID_ADDRESS).as_str()).unwrap().as_str(),
            VALID_ADDRESS
        );
        assert_eq!(fields.email(padded(VALID_EMAIL).as_str()).unwrap().as_str(), VALID_EMAIL);
        assert_eq!(fields.tag(padded(VALID_TAG_1).as_str()).unwrap().as_str(), VALID_TAG_1);
        assert_eq!(
            fields.group(padded(VALID_GROUP_1).as_str()).unwrap().as_str(),
            VALID_GROUP_1
        );
    }

    #[test]
    fn test_address_blank_asymmetry() {
        let fields = fields();
        assert!(fields.address("").unwrap().is_empty());
        assert!(fields.address("   ").is_err());
        assert!(fields.address(WHITESPACE).is_err());
        assert_eq!(fields.address(" 123 Main St ").unwrap().as_str(), "123 Main St");
    }

    #[test]
    fn test_empty_phone_is_valid() {
        assert!(fields().phone("").unwrap().is_empty());
        assert!(fields().phone("   ").unwrap().is_empty());
    }

    #[test]
    fn test_length_boundaries() {
        let fields = fields();
        let limits = *fields.limits();

        assert!(fields.name("a".repeat(limits.name).as_str()).is_ok());
        assert_eq!(
            fields.name("a".repeat(limits.name + 1).as_str()),
            Err(ValidationError::Length {
                field: FieldKind::Name,
                max: limits.name
            })
        );

        assert!(fields.phone("1".repeat(limits.phone).as_str()).is_ok());
        assert!(fields.phone("1".repeat(limits.phone + 1).as_str()).is_err());

        let email_at_max = format!("{}@example.com", "a".repeat(limits.email - 12));
        assert!(fields.email(email_at_max.as_str()).is_ok());
        let email_too_long = format!("{}@example.com", "a".repeat(limits.email + 1));
        assert!(matches!(
            fields.email(email_too_long.as_str()),
            Err(ValidationError::Length { .. })
        ));

        assert!(fields.address("a".repeat(limits.address).as_str()).is_ok());
        assert!(fields.address("a".repeat(limits.address + 1).as_str()).is_err());
        assert!(fields.tag("a".repeat(limits.tag).as_str()).is_ok());
        assert!(fields.tag("a".repeat(limits.tag + 1).as_str()).is_err());
        assert!(fields.group("a".repeat(limits.group).as_str()).is_ok());
        assert!(fields.group("a".repeat(limits.group + 1).as_str()).is_err());
        assert!(fields.note("a".repeat(limits.note).as_str()).is_ok());
        assert!(fields.note("a".repeat(limits.note + 1).as_str()).is_err());
    }

    #[test]
    fn test_length_error_messages() {
        let fields = fields();
        let err = fields.group("g".repeat(51).as_str()).unwrap_err();
        assert_eq!(err.to_string(), "Group name too long (max 50 characters).");
        let err = fields.note("n".repeat(501).as_str()).unwrap_err();
        assert_eq!(err.to_string(), "Note too long (max 500 characters).");
    }

    #[test]
    fn test_custom_limits() {
        let fields = FieldValidators::new(FieldLimits::default().with(FieldKind::Tag, 3));
        assert!(fields.tag("abc").is_ok());
        assert_eq!(
            fields.tag("abcd"),
            Err(ValidationError::Length {
                field: FieldKind::Tag,
                max: 3
            })
        );
    }

    #[test]
    fn test_syntax_checked_before_length() {
        let fields = FieldValidators::new(FieldLimits::default().with(FieldKind::Name, 2));
        assert!(matches!(
            fields.name("R@chel"),
            Err(ValidationError::Syntax { .. })
        ));
    }

    #[test]
    fn test_tags_batch() {
        let fields = fields();
        assert!(fields.tags([VALID_TAG_1, INVALID_TAG]).is_err());
        assert!(fields.tags(Vec::<String>::new()).unwrap().is_empty());

        let tags = fields.tags([VALID_TAG_1, VALID_TAG_2]).unwrap();
        let expected: BTreeSet<Tag> = [VALID_TAG_1, VALID_TAG_2]
            .into_iter()
            .map(|t| Tag::try_from(t).unwrap())
            .collect();
        assert_eq!(tags, expected);

        let deduped = fields.tags([VALID_TAG_1, " friend "]).unwrap();
        assert_eq!(deduped.len(), 1);
    }

    #[test]
    fn test_groups_batch() {
        let fields = fields();
        assert!(fields.groups([VALID_GROUP_1, INVALID_GROUP]).is_err());
        assert!(fields.groups(Vec::<&str>::new()).unwrap().is_empty());
        let groups = fields.groups([VALID_GROUP_1, VALID_GROUP_2]).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_batch_reports_first_invalid_element() {
        let err = fields().tags(["ok", "#bad", "b@d"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Syntax {
                field: FieldKind::Tag,
                message: crate::field::TAG_CONSTRAINTS
            }
        );
    }

    #[test]
    fn test_only_ascii_whitespace_is_trimmed_or_accepted() {
        let fields = fields();
        assert!(fields.phone("123\u{00A0}456").is_err());
        assert_eq!(fields.phone("123 456").unwrap().as_str(), "123 456");
        assert_eq!(fields.address("\u{00A0}").unwrap().as_str(), "\u{00A0}");
        assert!(fields.address(" \t ").is_err());
        assert_eq!(fields.name("\tAmy\r\n").unwrap().as_str(), "Amy");
    }
}
