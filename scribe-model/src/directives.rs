//! Template directives.

use indexmap::IndexMap;

/// Read-only directive map supplied with a generation request.
///
/// Iteration follows insertion order. Lookups ignore ASCII case, matching
/// how directive names are written in template headers (`ClassName`,
/// `classname`). Keys that differ only in case name the same directive: the
/// first spelling and position are kept and the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    entries: IndexMap<String, String>,
}

impl Directives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a directive value by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Directives {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: IndexMap<String, String> = IndexMap::new();
        for (key, value) in iter {
            let key: String = key.into();
            let value: String = value.into();
            match entries
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(&key))
            {
                Some((_, slot)) => *slot = value,
                None => {
                    entries.insert(key, value);
                }
            }
        }
        Self { entries }
    }
}
