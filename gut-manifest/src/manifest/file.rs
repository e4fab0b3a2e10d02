use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Declaration, Result};

/// Represents a gut.toml file with both raw content and parsed manifest.
pub struct GutToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl GutToml {
    /// Open and parse a gut.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Lower every emitted type.
    pub fn declarations(&self) -> Result<Vec<Declaration>> {
        self.manifest.declarations()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gut.toml");
        fs::write(
            &path,
            "[types.User]\nfields = [{ name = \"Name\", type = \"string\" }]\n",
        )
        .unwrap();

        let file = GutToml::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert!(file.content().contains("[types.User]"));
        assert!(file.manifest().has_type("User"));
        assert_eq!(file.declarations().unwrap().len(), 1);
    }

    #[test]
    fn test_open_missing() {
        let temp = TempDir::new().unwrap();
        let result = GutToml::open(temp.path().join("gut.toml"));
        assert!(matches!(result.map(|_| ()).unwrap_err().as_ref(), crate::Error::Io { .. }));
    }
}
