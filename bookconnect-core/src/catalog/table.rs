//! Id → display name lookup tables
//!
//! Author and genre tables keep the key order of the document they were
//! loaded from. That order is the "natural" order used when building
//! dropdown options, so a plain `HashMap` is not enough here.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Ordered mapping from opaque id to display name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

/// Author id → author name
pub type AuthorTable = LookupTable;

/// Genre id → genre name
pub type GenreTable = LookupTable;

impl LookupTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the original position if the id already exists
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        match self.positions.get(&id) {
            Some(&pos) => self.entries[pos].1 = name,
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
            }
        }
    }

    /// Display name for an id
    pub fn name(&self, id: &str) -> Option<&str> {
        self.positions
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, name)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for LookupTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = LookupTable::new();
        for (id, name) in iter {
            table.insert(id, name);
        }
        table
    }
}

impl Serialize for LookupTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

struct LookupTableVisitor;

impl<'de> Visitor<'de> for LookupTableVisitor {
    type Value = LookupTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping of id to display name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = LookupTable::new();
        while let Some((id, name)) = access.next_entry::<String, String>()? {
            table.insert(id, name);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for LookupTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LookupTableVisitor)
    }
}
