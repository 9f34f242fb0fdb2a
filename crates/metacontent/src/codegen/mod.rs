//! Elm code generation from the content registry.
//!
//! The generated module emulates an interface over the content modules:
//! - `MultiModel` / `MultiMsg` unions with one constructor per module
//! - `menuOptions`, `update`, `viewInside`, `viewOutside`, `subscriptions`
//!   dispatchers with one case arm per module
//!
//! All segments are derived from the same registry, so constructor and arm
//! order is identical everywhere.

mod segments;
mod skeleton;

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::registry::ContentRegistry;

/// The composed text blocks, one per skeleton slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segments {
    pub imports: String,
    pub state_union: String,
    pub menu_options: String,
    pub message_union: String,
    pub update: String,
    pub view_inside: String,
    pub view_outside: String,
    pub subscriptions: String,
}

impl Segments {
    /// Composes every segment from the registry.
    pub fn compose(registry: &ContentRegistry, namespace: &str) -> Self {
        Self {
            imports: segments::imports(registry, namespace),
            state_union: segments::state_union(registry),
            menu_options: segments::menu_dispatch(registry),
            message_union: segments::message_union(registry),
            update: segments::update_dispatch(registry),
            view_inside: segments::view_inside_dispatch(registry),
            view_outside: segments::view_outside_dispatch(registry),
            subscriptions: segments::subscription_dispatch(registry),
        }
    }
}

/// A rendered document and where it belongs.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub path: PathBuf,
    pub contents: String,
}

/// Generates the aggregate module for the registry.
pub fn generate(registry: &ContentRegistry, config: &GeneratorConfig) -> GeneratedDocument {
    let segments = Segments::compose(registry, &config.content_namespace);
    tracing::debug!(units = registry.len(), module = %config.module_name, "assembling document");

    GeneratedDocument {
        path: config.out_path.clone(),
        contents: skeleton::assemble(&segments, &config.module_name),
    }
}
