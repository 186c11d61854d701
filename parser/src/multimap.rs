//! Tokenized arguments keyed by prefix.

use crate::{ParseError, Prefix};

/// The result of tokenizing one argument string.
///
/// Maps each prefix that appeared to the raw values that followed it, in the
/// order they were written, and keeps the unlabelled preamble. Values are
/// stored exactly as typed (untrimmed). A prefix that never appeared is
/// absent; a prefix followed directly by the next boundary maps to `""`.
///
/// # Examples
///
/// ```
/// use edutrack_parser::{PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG, tokenize};
///
/// let args = tokenize(" 1 n/Amy t/a t/b", &[PREFIX_NAME, PREFIX_TAG, PREFIX_PHONE]);
/// assert_eq!(args.preamble(), " 1 ");
/// assert_eq!(args.get_value(PREFIX_NAME), Some("Amy "));
/// assert_eq!(args.get_all_values(PREFIX_TAG), ["a ", "b"]);
/// assert_eq!(args.get_value(PREFIX_PHONE), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    entries: Vec<(Prefix, Vec<String>)>,
    preamble: String,
}

impl ArgumentMultimap {
    pub(crate) fn with_preamble(preamble: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            preamble: preamble.into(),
        }
    }

    pub(crate) fn put(&mut self, prefix: Prefix, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((prefix, vec![value])),
        }
    }

    /// Returns the last value given for `prefix`, or `None` if it never
    /// appeared.
    pub fn get_value(&self, prefix: Prefix) -> Option<&str> {
        self.get_all_values(prefix).last().map(String::as_str)
    }

    /// Returns every value given for `prefix`, in input order.
    pub fn get_all_values(&self, prefix: Prefix) -> &[String] {
        self.entries
            .iter()
            .find(|(p, _)| *p == prefix)
            .map_or(&[], |(_, values)| values.as_slice())
    }

    /// Text before the first prefix, untrimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.entries.iter().any(|(p, _)| *p == prefix)
    }

    /// Returns `true` if every prefix in `prefixes` appeared at least once.
    pub fn are_prefixes_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.contains(*prefix))
    }

    /// Prefixes that appeared, in order of first appearance.
    pub fn prefixes(&self) -> impl Iterator<Item = Prefix> + '_ {
        self.entries.iter().map(|(prefix, _)| *prefix)
    }

    /// Fails if any of `prefixes` was given more than once.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DuplicatePrefixes`] listing every offending
    /// prefix, whether the repeated values are equal or not.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let mut duplicated: Vec<Prefix> = Vec::new();
        for prefix in prefixes {
            if self.get_all_values(*prefix).len() > 1 && !duplicated.contains(prefix) {
                duplicated.push(*prefix);
            }
        }

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG};

    fn sample() -> ArgumentMultimap {
        let mut map = ArgumentMultimap::with_preamble("3 ");
        map.put(PREFIX_TAG, "friends ");
        map.put(PREFIX_NAME, "Amy ");
        map.put(PREFIX_TAG, "colleagues");
        map.put(PREFIX_PHONE, "");
        map
    }

    #[test]
    fn test_get_value_returns_last() {
        let map = sample();
        assert_eq!(map.get_value(PREFIX_TAG), Some("colleagues"));
        assert_eq!(map.get_value(PREFIX_NAME), Some("Amy "));
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let map = sample();
        assert_eq!(map.get_value(PREFIX_PHONE), Some(""));
        assert_eq!(map.get_value(PREFIX_EMAIL), None);
        assert!(map.get_all_values(PREFIX_EMAIL).is_empty());
    }

    #[test]
    fn test_prefix_order_is_first_appearance() {
        let map = sample();
        let order: Vec<_> = map.prefixes().collect();
        assert_eq!(order, vec![PREFIX_TAG, PREFIX_NAME, PREFIX_PHONE]);
        assert!(map.are_prefixes_present(&[PREFIX_NAME, PREFIX_PHONE]));
        assert!(!map.are_prefixes_present(&[PREFIX_NAME, PREFIX_EMAIL]));
    }

    #[test]
    fn test_verify_no_duplicates() {
        let map = sample();
        assert!(map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE]).is_ok());
        assert_eq!(
            map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_TAG, PREFIX_TAG]),
            Err(ParseError::DuplicatePrefixes(vec![PREFIX_TAG]))
        );
    }

    #[test]
    fn test_identical_duplicates_still_rejected() {
        let mut map = ArgumentMultimap::default();
        map.put(PREFIX_NAME, "Amy");
        map.put(PREFIX_NAME, "Amy");
        assert!(map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME]).is_err());
    }
}
