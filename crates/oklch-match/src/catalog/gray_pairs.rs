//! Color family → neutral family pairing

use std::collections::BTreeMap;

/// The neutral family used when a color family has no explicit partner.
pub const DEFAULT_NEUTRAL: &str = "gray";

/// Mapping from color-family name to its paired neutral family, used for
/// backgrounds and text next to an accent scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrayPairTable {
    pairs: BTreeMap<String, String>,
}

impl GrayPairTable {
    /// Record that `family` pairs with `neutral`, replacing any earlier entry.
    pub fn insert(&mut self, family: impl Into<String>, neutral: impl Into<String>) {
        self.pairs.insert(family.into(), neutral.into());
    }

    /// The explicit partner of `family`, if any.
    pub fn get(&self, family: &str) -> Option<&str> {
        self.pairs.get(family).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Entries sorted by family name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GrayPairTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (family, neutral) in iter {
            table.insert(family, neutral);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table: GrayPairTable = [("indigo", "slate"), ("red", "mauve")].into_iter().collect();
        assert_eq!(table.get("indigo"), Some("slate"));
        assert_eq!(table.get("teal"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = GrayPairTable::default();
        table.insert("grass", "sage");
        table.insert("grass", "olive");
        assert_eq!(table.get("grass"), Some("olive"));
        assert_eq!(table.len(), 1);
    }
}
