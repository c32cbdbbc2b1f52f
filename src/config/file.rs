//! YAML configuration file
//!
//! Every key is optional; absent keys fall back to the built-in defaults and
//! any flag given on the command line wins over the file.
//!
//! ```yaml
//! actual_column: diagnosis
//! predicted_column: model_output
//! delimiter: tab
//! missing: reject
//! lowercase_labels: true
//! metrics: true
//! ```

use crate::table::MissingPolicy;
use confmat_common::{ConfmatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub actual_column: Option<String>,
    pub predicted_column: Option<String>,
    pub delimiter: Option<String>,
    pub missing: Option<MissingPolicy>,
    pub lowercase_labels: Option<bool>,
    pub metrics: Option<bool>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfmatError::ConfigNotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfmatError::Io {
            context: format!("reading config file: {}", path.display()),
            source: e,
        })?;

        Self::from_yaml(&content, path)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        // An empty document is a valid, empty configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfmatError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
