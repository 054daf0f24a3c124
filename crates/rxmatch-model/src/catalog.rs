//! Catalogs of canonical names and their opaque references.
//!
//! A catalog is the universe of valid lookup targets for a search: drug names
//! mapped to their monograph locators, or condition names mapped to theirs.
//! Entries keep their declaration order, which decides ties between equally
//! close matches.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};

/// A canonical name and the reference the catalog attaches to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub reference: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// Immutable name → reference mapping in declaration order.
///
/// Names are unique. The JSON form is a plain object
/// (`{"Tylenol": "https://...", ...}`) read in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from `(name, reference)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateCatalogName`] if a name appears twice.
    pub fn new<I, N, R>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (name, reference) in pairs {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(ModelError::DuplicateCatalogName { name });
            }
            entries.push(CatalogEntry {
                name,
                reference: reference.into(),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.reference)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of catalog names to references")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Catalog, A::Error> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, reference)) = access.next_entry::<String, String>()? {
            pairs.push((name, reference));
        }
        Catalog::new(pairs).map_err(<A::Error as serde::de::Error>::custom)
    }
}

/// A catalog entry accepted by a lookup, with the scores that selected it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMatch {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// Edit distance between the folded query and the folded name.
    pub distance: usize,
    /// `1 - distance / max(len(query), len(name))`.
    pub similarity: f64,
}

impl CatalogMatch {
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn reference(&self) -> &str {
        &self.entry.reference
    }
}

/// Outcome of a catalog lookup. `None` is the ordinary "no match" result.
pub type MatchResult = Option<CatalogMatch>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_names() {
        let err = Catalog::new([("Tylenol", "u1"), ("Tylenol", "u2")]).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateCatalogName {
                name: "Tylenol".to_string()
            }
        );
    }

    #[test]
    fn deserializes_in_document_order() {
        let json = r#"{"Zyrtec": "u3", "Advil": "u1", "Motrin": "u2"}"#;
        let catalog: Catalog = serde_json::from_str(json).expect("parse catalog");
        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zyrtec", "Advil", "Motrin"]);
        assert_eq!(catalog.get("Advil").map(|e| e.reference.as_str()), Some("u1"));
    }

    #[test]
    fn deserialize_reports_duplicates() {
        let json = r#"{"Advil": "u1", "Advil": "u2"}"#;
        let err = serde_json::from_str::<Catalog>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate catalog name: Advil"));
    }

    #[test]
    fn serializes_as_object() {
        let catalog = Catalog::new([("Advil", "u1"), ("Aleve", "u2")]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"Advil":"u1","Aleve":"u2"}"#);
    }
}
