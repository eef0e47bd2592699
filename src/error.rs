//! Error types for symfig.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for symfig operations.
pub type Result<T> = std::result::Result<T, SymfigError>;

/// Errors that can occur while rendering figures.
#[derive(Debug, Error)]
pub enum SymfigError {
    /// Failed to create an output directory.
    #[error("Failed to create directory: {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write file: {path}")]
    FileWrite {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a raster image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Array dimensions did not line up.
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// A figure name that is not in the catalogue.
    #[error("Unknown figure '{name}' for target {target}")]
    UnknownFigure {
        /// Name as given on the command line.
        name: String,
        /// Target whose catalogue was searched.
        target: String,
    },

    /// Closing a symmetry group under composition did not terminate.
    #[error("Symmetry group '{name}' did not close within {limit} products")]
    GroupNotClosed {
        /// Group name.
        name: String,
        /// Number of products tried.
        limit: usize,
    },

    /// A configuration value outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SymfigError {
    /// Create a CreateDir error.
    pub fn create_dir(path: PathBuf, source: std::io::Error) -> Self {
        Self::CreateDir { path, source }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite { path, source }
    }

    /// Create an UnknownFigure error.
    pub fn unknown_figure(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownFigure {
            name: name.into(),
            target: target.into(),
        }
    }

    /// Create a GroupNotClosed error.
    pub fn group_not_closed(name: impl Into<String>, limit: usize) -> Self {
        Self::GroupNotClosed {
            name: name.into(),
            limit,
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
