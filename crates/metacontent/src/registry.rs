//! Ordered registry of discovered content modules.
//!
//! Every generated segment is derived from one `ContentRegistry`, so variant N
//! of `MultiModel` always lines up with variant N of `MultiMsg` and arm N of
//! each dispatcher.

use std::fmt;
use std::path::PathBuf;
use serde::Serialize;

/// Name of a content module, used verbatim as module alias, variant suffix
/// and dispatch label in the generated code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single discovered content module.
#[derive(Debug, Clone, Serialize)]
pub struct ContentUnit {
    pub identifier: Identifier,
    /// File the identifier was derived from.
    pub source_path: PathBuf,
}

impl ContentUnit {
    pub fn new(identifier: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            identifier: Identifier::new(identifier),
            source_path: source_path.into(),
        }
    }
}

/// The discovered content modules, sorted by identifier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentRegistry {
    units: Vec<ContentUnit>,
    skipped: Vec<PathBuf>,
}

impl ContentRegistry {
    /// Builds a registry, sorting units lexicographically by identifier.
    ///
    /// Directory listing order differs between platforms and runs; sorting
    /// here keeps the generated document byte-identical for the same input.
    pub fn from_units(mut units: Vec<ContentUnit>) -> Self {
        units.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        Self {
            units,
            skipped: Vec::new(),
        }
    }

    /// Records entries that were seen during discovery but not registered.
    pub fn with_skipped(mut self, mut skipped: Vec<PathBuf>) -> Self {
        skipped.sort();
        self.skipped = skipped;
        self
    }

    /// Convenience constructor for in-memory registries (no source files).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_units(
            names
                .into_iter()
                .map(|name| ContentUnit::new(name, PathBuf::new()))
                .collect(),
        )
    }

    pub fn units(&self) -> &[ContentUnit] {
        &self.units
    }

    /// Entries in the content directory that did not become units.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.units.iter().map(|u| &u.identifier)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_units_by_identifier() {
        let registry = ContentRegistry::from_names(["Gamma", "Alpha", "Beta"]);
        let names: Vec<&str> = registry.identifiers().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn sort_is_byte_order() {
        // Uppercase sorts before lowercase in byte order
        let registry = ContentRegistry::from_names(["alpha", "Zeta"]);
        let names: Vec<&str> = registry.identifiers().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "alpha"]);
    }

    #[test]
    fn empty_registry() {
        let registry = ContentRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
