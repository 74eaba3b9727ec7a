//! Insertion-ordered string map for manifest objects
//!
//! Manifest pages are reported in the order the bundler wrote them, so JSON
//! objects are read into a map that keeps document order. A repeated key
//! keeps its first position and takes the last value.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

/// String-keyed map that iterates in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert `value` under `key`
    ///
    /// An existing key is updated where it stands; a new key is appended.
    pub fn insert(&mut self, key: String, value: V) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// True if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<&str> for OrderedMap<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry for key '{}'", key),
        }
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> Extend<(String, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a String, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_document_order() {
        let map: OrderedMap<u32> =
            serde_json::from_str(r#"{"/zeta": 1, "/alpha": 2, "/mid": 3}"#).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["/zeta", "/alpha", "/mid"]);
        assert_eq!(map["/alpha"], 2);
    }

    #[test]
    fn test_repeated_key_keeps_first_position_and_last_value() {
        let map: OrderedMap<u32> =
            serde_json::from_str(r#"{"/a": 1, "/b": 2, "/a": 3}"#).unwrap();
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(&"/a".to_string(), &3), (&"/b".to_string(), &2)]
        );
    }

    #[test]
    fn test_extend_updates_in_place_and_appends_new_keys() {
        let mut map: OrderedMap<&str> = [("/z".to_string(), "old"), ("/a".to_string(), "a")]
            .into_iter()
            .collect();
        map.extend([("/new".to_string(), "n"), ("/z".to_string(), "new")]);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["/z", "/a", "/new"]);
        assert_eq!(map.get("/z"), Some(&"new"));
        assert_eq!(map.len(), 3);
        assert!(!map.contains_key("/missing"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_str::<OrderedMap<u32>>("[1, 2]").is_err());
    }
}
