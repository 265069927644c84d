//! Layered `.env` loading.
//!
//! Two files are merged: the user layer at `~/.env` and the project layer at
//! `.env` one directory above the served document root. Project entries
//! override user entries on collision. A missing layer contributes nothing.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::core::constants;
use crate::core::domain::EnvVarSet;
use crate::error::{ConfigError, Result};

/// Locations of the user and project `.env` files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLayers {
    global: PathBuf,
    local: PathBuf,
}

impl EnvLayers {
    /// Layers from explicit paths
    pub fn new(global: impl Into<PathBuf>, local: impl Into<PathBuf>) -> Self {
        Self {
            global: global.into(),
            local: local.into(),
        }
    }

    /// Compute layer paths from a home directory and a document root.
    ///
    /// The project layer sits in the parent of `document_root`; a root with
    /// no parent (such as `/`) is used as is.
    pub fn locate(home: &Path, document_root: &Path) -> Self {
        let base = document_root.parent().unwrap_or(document_root);
        Self::new(
            home.join(constants::ENV_FILE),
            base.join(constants::ENV_FILE),
        )
    }

    /// Compute layer paths using the invoking user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the home directory is unknown.
    pub fn discover(document_root: &Path) -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::locate(&home, document_root))
    }

    /// User-scope file
    pub fn global(&self) -> &Path {
        &self.global
    }

    /// Project-scope file
    pub fn local(&self) -> &Path {
        &self.local
    }

    /// Parse both layers and merge them, project over user.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if a layer exists but cannot be read.
    pub fn load(&self) -> Result<EnvVarSet> {
        let mut merged = read_layer(&self.global)?;
        let local = read_layer(&self.local)?;

        debug!(
            global = merged.len(),
            local = local.len(),
            "merging env layers"
        );

        merged.merge(local);
        Ok(merged)
    }

    /// Load both layers and export the result into the process environment.
    ///
    /// Returns the merged set as well so callers can pass it on explicitly.
    pub fn load_into_process(&self) -> Result<EnvVarSet> {
        let merged = self.load()?;
        merged.apply_to_process();
        trace!(count = merged.len(), "exported env layers to process");
        Ok(merged)
    }
}

/// Discover and load the layers for a document root.
pub fn load(document_root: &Path) -> Result<EnvVarSet> {
    EnvLayers::discover(document_root)?.load()
}

fn read_layer(path: &Path) -> Result<EnvVarSet> {
    match EnvVarSet::from_file(path) {
        Ok(set) => {
            trace!(path = %path.display(), count = set.len(), "read env layer");
            Ok(set)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "env layer not found, skipping");
            Ok(EnvVarSet::new())
        }
        Err(source) => Err(ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Layout {
        _tmp: TempDir,
        home: PathBuf,
        project: PathBuf,
        document_root: PathBuf,
    }

    fn layout() -> Layout {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("home");
        let project = tmp.path().join("site");
        let document_root = project.join("public");
        fs::create_dir_all(&home).unwrap();
        fs::create_dir_all(&document_root).unwrap();
        Layout {
            _tmp: tmp,
            home,
            project,
            document_root,
        }
    }

    #[test]
    fn test_locate_paths() {
        let layers = EnvLayers::locate(Path::new("/home/dev"), Path::new("/srv/site/public"));

        assert_eq!(layers.global(), Path::new("/home/dev/.env"));
        assert_eq!(layers.local(), Path::new("/srv/site/.env"));
    }

    #[test]
    fn test_locate_root_document_root() {
        let layers = EnvLayers::locate(Path::new("/home/dev"), Path::new("/"));
        assert_eq!(layers.local(), Path::new("/.env"));
    }

    #[test]
    fn test_local_overrides_global() {
        let l = layout();
        fs::write(l.home.join(".env"), "A=1\n").unwrap();
        fs::write(l.project.join(".env"), "A=2\nB=3\n").unwrap();

        let merged = EnvLayers::locate(&l.home, &l.document_root).load().unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("A"), Some("2"));
        assert_eq!(merged.get("B"), Some("3"));
    }

    #[test]
    fn test_missing_global_yields_local_only() {
        let l = layout();
        fs::write(l.project.join(".env"), "A=2\nB=3\n").unwrap();

        let merged = EnvLayers::locate(&l.home, &l.document_root).load().unwrap();

        assert_eq!(merged, EnvVarSet::parse("A=2\nB=3\n"));
    }

    #[test]
    fn test_missing_local_yields_global_only() {
        let l = layout();
        fs::write(l.home.join(".env"), "TOKEN_KEY=abc\n").unwrap();

        let merged = EnvLayers::locate(&l.home, &l.document_root).load().unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("TOKEN_KEY"), Some("abc"));
    }

    #[test]
    fn test_both_missing_yields_empty() {
        let l = layout();
        let merged = EnvLayers::locate(&l.home, &l.document_root).load().unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_document_root_env_is_not_read() {
        let l = layout();
        fs::write(l.document_root.join(".env"), "WRONG=1\n").unwrap();

        let merged = EnvLayers::locate(&l.home, &l.document_root).load().unwrap();
        assert!(!merged.contains_key("WRONG"));
    }

    #[test]
    fn test_unreadable_layer_errors() {
        let l = layout();
        // A directory where the file should be cannot be read as text.
        fs::create_dir(l.project.join(".env")).unwrap();

        let result = EnvLayers::locate(&l.home, &l.document_root).load();
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::ReadFile { .. }))
        ));
    }
}
