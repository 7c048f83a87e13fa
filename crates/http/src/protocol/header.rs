//! Header storage with first-occurrence-wins semantics.
//!
//! Names are kept exactly as they appeared on the wire and compared byte-exact,
//! so `Host` and `host` are two different headers. This intentionally differs
//! from the case-insensitive rule of RFC 9110; callers that need it should
//! normalise names themselves.

use std::collections::HashMap;
use std::collections::hash_map::{Entry, Iter};

/// A mapping from header name to a single header value.
///
/// When the same name is inserted twice, the first value is kept and the later
/// one is dropped. Values are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    data: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header unless one with the same name is already present.
    ///
    /// Returns `true` if the value was stored, `false` if it was discarded as a
    /// duplicate.
    pub fn insert(&mut self, name: String, value: String) -> bool {
        match self.data.entry(name) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, String)> for Headers {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut headers = Headers::new();
        assert!(headers.insert("A".into(), "1".into()));
        assert!(!headers.insert("A".into(), "2".into()));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("A"), Some("1"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let headers: Headers = [("Host".to_string(), "a".to_string()), ("host".to_string(), "b".to_string())].into_iter().collect();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Host"), Some("a"));
        assert_eq!(headers.get("host"), Some("b"));
        assert_eq!(headers.get("HOST"), None);
        assert!(!headers.contains_key("HOST"));
    }

    #[test]
    fn empty_headers() {
        let headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.iter().count(), 0);
    }
}
