//! The target project's `pubspec.yaml`, reduced to what Glimpse needs.
//!
//! The generator emits `package:` import URIs, so the only field we care
//! about is the top-level `name:`. Everything else in the manifest is
//! deliberately ignored.

use std::path::Path;

use serde::Deserialize;

use super::error::DomainError;

#[derive(Debug, Deserialize)]
struct RawPubspec {
    name: Option<String>,
}

/// Parsed view of the project manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    name: String,
}

impl ProjectManifest {
    /// Parse manifest `content` read from `path`.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(path: &Path, content: &str) -> Result<Self, DomainError> {
        let raw: RawPubspec =
            serde_yaml::from_str(content).map_err(|e| DomainError::InvalidManifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let name = raw.name.unwrap_or_default();
        if name.is_empty() {
            return Err(DomainError::InvalidManifest {
                path: path.to_path_buf(),
                reason: "missing package name".into(),
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(DomainError::InvalidManifest {
                path: path.to_path_buf(),
                reason: format!("'{name}' is not a valid package name"),
            });
        }

        Ok(Self { name })
    }

    /// The package name used in `package:` import URIs.
    pub fn package_name(&self) -> &str {
        &self.name
    }
}
