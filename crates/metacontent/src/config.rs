//! Generator configuration.

use std::path::PathBuf;

/// Configuration for the metacontent generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory containing one source file per content module.
    pub content_dir: PathBuf,

    /// Path of the generated aggregate module.
    pub out_path: PathBuf,

    /// File suffix stripped from each file name to form its identifier.
    pub suffix: String,

    /// Module namespace the content modules live under (e.g. `Content`).
    pub content_namespace: String,

    /// Name of the generated module.
    pub module_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("src/Content"),
            out_path: PathBuf::from("src/MetaContent.elm"),
            suffix: ".elm".to_string(),
            content_namespace: "Content".to_string(),
            module_name: "MetaContent".to_string(),
        }
    }
}
