//! Utility types for validation.

use std::collections::HashSet;

/// A set of names compared case-insensitively.
///
/// Used for matching header columns and configured field names, which are
/// compared lower-cased.
#[derive(Debug, Clone, Default)]
pub(crate) struct CaseInsensitiveSet {
    /// Lower-cased names
    inner: HashSet<String>,
}

impl CaseInsensitiveSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning false if it was already present in any case.
    pub(crate) fn insert(&mut self, value: impl AsRef<str>) -> bool {
        self.inner.insert(value.as_ref().to_lowercase())
    }

    /// Check if the set contains a value (case-insensitive).
    pub(crate) fn contains(&self, value: impl AsRef<str>) -> bool {
        self.inner.contains(&value.as_ref().to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for CaseInsensitiveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
