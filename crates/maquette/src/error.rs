//! Error types for maquette operations.
//!
//! This module provides the main error type [`MaquetteError`], covering
//! the two top-level failure classes a render run distinguishes: missing
//! dependencies (the Graphviz backend or a custom icon asset is absent)
//! and everything else (backend failures, I/O, bad configuration).

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

use maquette_core::semantic::SemanticError;

/// The main error type for maquette operations.
#[derive(Debug, Error)]
pub enum MaquetteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graphviz executable `{command}` was not found")]
    MissingBackend { command: String },

    #[error("icon asset not found: {0}")]
    MissingAsset(PathBuf),

    #[error("Graphviz exited with {status}: {stderr}")]
    Backend { status: ExitStatus, stderr: String },
}

impl MaquetteError {
    /// Whether this error is a missing external dependency (the layout
    /// backend or an icon asset), as opposed to a failure of the render
    /// itself.
    ///
    /// The CLI uses this split to decide between install instructions and
    /// the generic "check your Graphviz installation" hint.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(
            self,
            Self::MissingBackend { .. } | Self::MissingAsset(_)
        )
    }
}
