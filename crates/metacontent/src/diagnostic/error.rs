//! Generator error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during generation.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum GeneratorError {
    // =========================================================================
    // Discovery Errors
    // =========================================================================
    #[error("Failed to read content directory '{}': {message}", path.display())]
    #[diagnostic(
        code(metacontent::discover::unreadable_dir),
        help("Content modules are expected one per file, e.g. src/Content/Clock.elm")
    )]
    ContentDirUnreadable {
        path: PathBuf,
        message: String,
    },

    #[error("Content file name is not valid UTF-8: {}", path.display())]
    #[diagnostic(
        code(metacontent::discover::invalid_file_name),
        help("Rename the file so its name is a valid module name")
    )]
    InvalidFileName {
        path: PathBuf,
    },

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to write '{}': {message}", path.display())]
    #[diagnostic(code(metacontent::io::write_error))]
    IoError {
        path: PathBuf,
        message: String,
    },
}

impl GeneratorError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a discovery error for an unreadable content directory.
    pub fn unreadable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ContentDirUnreadable {
            path: path.into(),
            message: message.into(),
        }
    }
}
