//! Theme configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating a theme manifest.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Manifest file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Manifest body is not valid TOML for the expected schema.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Path or label of the parsed source.
        origin: String,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
    /// A content-scan glob did not compile.
    #[error("invalid content glob `{pattern}`: {source}")]
    InvalidGlob {
        /// Offending pattern.
        pattern: String,
        /// Underlying glob failure.
        #[source]
        source: globset::Error,
    },
    /// Manifest parsed but is semantically invalid.
    #[error("invalid theme manifest: {0}")]
    Validation(String),
}

/// Result alias for theme configuration operations.
pub type ThemeResult<T> = Result<T, ThemeError>;
