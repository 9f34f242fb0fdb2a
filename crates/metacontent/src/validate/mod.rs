//! Non-fatal checks over the discovered registry.
//!
//! These never inspect module contents, so they say nothing about whether a
//! content module actually exposes `Model`, `Msg`, `update` and friends.

mod identifier;

use std::path::PathBuf;

use serde::Serialize;

use crate::registry::{ContentRegistry, Identifier};

pub use identifier::is_module_name;

/// A warning about the registry that does not stop generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lint {
    /// No content modules were found; unions and case expressions will be empty.
    EmptyRegistry,
    /// The identifier cannot be used as a module or constructor name.
    InvalidIdentifier { identifier: Identifier },
    /// An entry in the content directory was not picked up as a module.
    SkippedFile { path: PathBuf },
}

impl Lint {
    pub fn message(&self) -> String {
        match self {
            Lint::EmptyRegistry => {
                "No content modules found; the generated module will not compile".to_string()
            }
            Lint::InvalidIdentifier { identifier } => format!(
                "'{}' is not a valid module name; the generated module will not compile",
                identifier
            ),
            Lint::SkippedFile { path } => format!(
                "Skipped '{}': not a readable file with the content suffix",
                path.display()
            ),
        }
    }
}

/// Collects lints for the registry.
pub fn lint_registry(registry: &ContentRegistry) -> Vec<Lint> {
    let mut lints = Vec::new();

    if registry.is_empty() {
        lints.push(Lint::EmptyRegistry);
    }

    for identifier in registry.identifiers() {
        if !is_module_name(identifier.as_str()) {
            lints.push(Lint::InvalidIdentifier {
                identifier: identifier.clone(),
            });
        }
    }

    for path in registry.skipped() {
        lints.push(Lint::SkippedFile { path: path.clone() });
    }

    lints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_is_linted() {
        let lints = lint_registry(&ContentRegistry::default());
        assert_eq!(lints, vec![Lint::EmptyRegistry]);
    }

    #[test]
    fn valid_registry_has_no_lints() {
        let registry = ContentRegistry::from_names(["Clock", "Todo_List", "Gallery2"]);
        assert!(lint_registry(&registry).is_empty());
    }

    #[test]
    fn flags_invalid_identifiers() {
        let registry = ContentRegistry::from_names(["Clock", "my-notes", "2048"]);
        let lints = lint_registry(&registry);

        assert_eq!(lints.len(), 2);
        assert!(lints.contains(&Lint::InvalidIdentifier {
            identifier: Identifier::new("my-notes")
        }));
        assert!(lints[0].message().contains("not a valid module name"));
    }

    #[test]
    fn skipped_entries_are_linted() {
        let registry = ContentRegistry::from_names(["Clock"])
            .with_skipped(vec![PathBuf::from("src/Content/notes.txt")]);
        let lints = lint_registry(&registry);

        assert_eq!(
            lints,
            vec![Lint::SkippedFile {
                path: PathBuf::from("src/Content/notes.txt")
            }]
        );
        assert!(lints[0].message().contains("notes.txt"));
    }
}
