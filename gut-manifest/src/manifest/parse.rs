//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr, sync::Arc};

use tracing::debug;

use super::{Manifest, validate::{ParseContext, validate_manifest}};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "gut.toml")
    }
}

impl Manifest {
    /// Parse a gut.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a gut.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = Arc::new(SourceContext::new(content, filename));
    let mut manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;

    validate_manifest(&manifest, &ParseContext::from_source(Arc::clone(&source)))?;
    manifest.source = Some(source);

    debug!(filename, types = manifest.types.len(), "parsed manifest");
    Ok(manifest)
}
