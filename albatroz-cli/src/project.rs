use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AlbatrozError, Result};

/// Name of the host project's manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Framework every host project must depend on.
pub const FRAMEWORK_PACKAGE: &str = "expo";

/// Command suggested to users running outside an Expo project.
pub const CREATE_PROJECT_HINT: &str = "npx create-expo-app@latest";

/// Dependency declarations read from `package.json`.
///
/// Only the dependency maps are kept; versions are never inspected.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl Manifest {
    /// Read and parse `package.json` in `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AlbatrozError::ManifestNotFound(path.clone()),
            _ => AlbatrozError::ManifestInvalid {
                path: path.clone(),
                reason: e.to_string(),
            },
        })?;
        tracing::debug!(path = %path.display(), "Loaded manifest");
        Self::parse(&content).map_err(|e| AlbatrozError::ManifestInvalid {
            path,
            reason: e.to_string(),
        })
    }

    /// Parse manifest JSON text.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Whether `name` appears in either `dependencies` or `devDependencies`.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}

/// A host project that passed validation.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    manifest: Manifest,
}

impl Project {
    /// Open the project rooted at `root`.
    ///
    /// Returns an error if:
    /// - `package.json` is missing or not valid JSON
    /// - neither dependency map declares `expo`
    pub fn open(root: &Path) -> Result<Self> {
        let manifest = Manifest::load(root)?;
        if !manifest.has_dependency(FRAMEWORK_PACKAGE) {
            return Err(AlbatrozError::MissingFramework {
                dependency: FRAMEWORK_PACKAGE,
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
