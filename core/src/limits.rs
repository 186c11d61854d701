use serde::{Deserialize, Serialize};

use crate::FieldKind;

/// Maximum accepted length, in characters, for every field kind.
///
/// Missing keys deserialize to the defaults from each field's
/// [`FieldRule`](crate::FieldRule), so a configuration file only needs to
/// name the limits it changes.
///
/// # Examples
///
/// ```
/// use edutrack_core::{FieldKind, FieldLimits};
///
/// let limits = FieldLimits::default().with(FieldKind::Tag, 10);
/// assert_eq!(limits.max_len(FieldKind::Tag), 10);
/// assert_eq!(limits.max_len(FieldKind::Phone), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    pub name: usize,
    pub phone: usize,
    pub address: usize,
    pub email: usize,
    pub tag: usize,
    pub group: usize,
    pub note: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name: FieldKind::Name.rule().default_max_len,
            phone: FieldKind::Phone.rule().default_max_len,
            address: FieldKind::Address.rule().default_max_len,
            email: FieldKind::Email.rule().default_max_len,
            tag: FieldKind::Tag.rule().default_max_len,
            group: FieldKind::Group.rule().default_max_len,
            note: FieldKind::Note.rule().default_max_len,
        }
    }
}

impl FieldLimits {
    /// Returns the maximum length for `kind`.
    pub fn max_len(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::Name => self.name,
            FieldKind::Phone => self.phone,
            FieldKind::Address => self.address,
            FieldKind::Email => self.email,
            FieldKind::Tag => self.tag,
            FieldKind::Group => self.group,
            FieldKind::Note => self.note,
        }
    }

    /// Returns a copy with the limit for `kind` replaced.
    pub fn with(mut self, kind: FieldKind, max_len: usize) -> Self {
        let slot = match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Phone => &mut self.phone,
            FieldKind::Address => &mut self.address,
            FieldKind::Email => &mut self.email,
            FieldKind::Tag => &mut self.tag,
            FieldKind::Group => &mut self.group,
            FieldKind::Note => &mut self.note,
        };
        *slot = max_len;
        self
    }

    /// Returns the first field whose limit is zero.
    pub fn first_zero(&self) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| self.max_len(*kind) == 0)
    }
}
