//! Error types for menu-mirror
//!
//! Uses `thiserror` for library errors. Only structural problems abort a
//! clone; unsupported nodes and absent attributes are tolerated.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu-mirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Main error type for menu-mirror operations
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The source tree is cyclic or nested deeper than allowed
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Menu description file could not be parsed
    #[error("invalid menu document {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Menu description format could not be determined from the file name
    #[error("unsupported menu document format: {file} (expected .toml or .json)")]
    UnknownDocumentFormat { file: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal problem with the shape of a source menu tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A submenu contains itself, directly or through descendants
    #[error("cyclic menu: '{}' is its own ancestor", MenuPath(.path))]
    Cycle { path: Vec<String> },

    /// Nesting exceeds the configured depth bound
    #[error("menu nesting depth {depth} exceeds limit {limit} at '{}'", MenuPath(.path))]
    DepthExceeded {
        depth: usize,
        limit: usize,
        path: Vec<String>,
    },
}

impl StructuralError {
    /// Titles of the submenus leading to the offending node
    pub fn path(&self) -> &[String] {
        match self {
            StructuralError::Cycle { path } | StructuralError::DepthExceeded { path, .. } => path,
        }
    }
}

/// Display adapter joining submenu titles with `>`
struct MenuPath<'a>(&'a [String]);

impl fmt::Display for MenuPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" > "))
    }
}
