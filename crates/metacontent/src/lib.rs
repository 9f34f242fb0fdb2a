//! # Metacontent
//!
//! This crate generates a single Elm module that dispatches over a set of
//! independently written content modules. Each content module follows the
//! same shape (`Model`, `Msg`, `menuOptions`, `update`, `viewInside`,
//! `viewOutside`, `subscriptions`); Elm has no type classes, so the
//! aggregate module spells out one union constructor and one case arm per
//! content module.
//!
//! ## Architecture
//!
//! ```text
//! src/Content/*.elm
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Discover   │  One identifier per file, sorted
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Registry   │  Single ordered list of content units
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Compose segments, place into skeleton
//! └──────┬───────┘
//!        │
//!        ▼
//! src/MetaContent.elm
//! ```
//!
//! The [`dispatch`] module offers the same dispatch natively in Rust, with
//! a trait in place of the generated unions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use metacontent::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::default());
//! let report = generator.generate()?;
//! println!("{} content modules", report.units.len());
//! ```

pub mod config;
pub mod codegen;
pub mod diagnostic;
pub mod discover;
pub mod dispatch;
pub mod registry;
pub mod validate;

use std::path::PathBuf;
use serde::Serialize;

pub use codegen::GeneratedDocument;
pub use config::GeneratorConfig;
pub use diagnostic::GeneratorError;
pub use registry::{ContentRegistry, ContentUnit, Identifier};
pub use validate::Lint;

/// Runs the discover, compose, assemble and write pipeline.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Discovers content modules and renders the document without writing it.
    pub fn render(&self) -> Result<(GeneratedDocument, GenerateReport), GeneratorError> {
        let registry = discover::discover(&self.config.content_dir, &self.config.suffix)?;
        let lints = validate::lint_registry(&registry);
        for lint in &lints {
            tracing::debug!(lint = %lint.message(), "registry lint");
        }

        let document = codegen::generate(&registry, &self.config);

        let report = GenerateReport {
            output: document.path.clone(),
            units: registry.identifiers().cloned().collect(),
            lints,
            bytes: document.contents.len(),
        };

        Ok((document, report))
    }

    /// Generates the document and writes it to the configured output path,
    /// replacing whatever was there.
    pub fn generate(&self) -> Result<GenerateReport, GeneratorError> {
        let (document, report) = self.render()?;
        write_document(&document)?;
        Ok(report)
    }
}

/// Writes a document, creating its parent directory if needed.
pub fn write_document(document: &GeneratedDocument) -> Result<(), GeneratorError> {
    if let Some(parent) = document.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GeneratorError::io(parent, e.to_string()))?;
        }
    }

    std::fs::write(&document.path, &document.contents)
        .map_err(|e| GeneratorError::io(&document.path, e.to_string()))?;

    tracing::debug!(path = %document.path.display(), bytes = document.contents.len(), "wrote document");
    Ok(())
}

/// Result of a successful generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// Where the document was (or would be) written.
    pub output: PathBuf,
    /// Content modules in generated order.
    pub units: Vec<Identifier>,
    /// Non-fatal warnings about the registry.
    pub lints: Vec<Lint>,
    /// Size of the generated document.
    pub bytes: usize,
}
