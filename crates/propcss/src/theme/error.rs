//! Theme loading errors.

use std::path::PathBuf;

/// Error returned when a theme document cannot be loaded.
///
/// Lookups against a loaded theme never fail; this type only covers reading
/// and parsing theme sources.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source was not valid JSON.
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    /// The source was not valid YAML.
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its root is not a mapping of scales.
    #[error("theme root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    /// The file extension does not name a supported format.
    #[error("unsupported theme format for '{}' (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl ThemeError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
