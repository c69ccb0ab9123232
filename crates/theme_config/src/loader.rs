//! Typed TOML configuration loading.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{ThemeError, ThemeResult};

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles filesystem access and TOML deserialization only;
/// callers validate the typed value afterwards (see
/// [`ThemeManifest::validate`](crate::ThemeManifest::validate)).
///
/// ```rust
/// # use std::path::Path;
/// # use theme_config::{ConfigLoader, ThemeManifest};
/// let loader = ConfigLoader::<ThemeManifest>::new(Path::new("/project"), "theme.manifest.toml");
/// assert!(loader.path().ends_with("theme.manifest.toml"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for a path relative to `root`.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
            _marker: PhantomData,
        }
    }

    /// Read and deserialize the file.
    pub fn load(&self) -> ThemeResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|source| ThemeError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&body).map_err(|source| ThemeError::Parse {
            origin: self.path.display().to_string(),
            source,
        })
    }

    /// Config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
