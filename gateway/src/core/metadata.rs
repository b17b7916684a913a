//! Project metadata served by the public metadata route
//!
//! The metadata file is TOML; its `[meta]` table is returned verbatim as JSON.
//! The file is read on every call so edits show up without a restart.

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Name of the table returned to clients
pub const META_SECTION: &str = "meta";

/// Default location of the metadata file, relative to the working directory
pub const DEFAULT_METADATA_PATH: &str = "deepgram.toml";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Metadata file not found: {0}")]
    NotFound(String),

    #[error("Missing [meta] section in {0}")]
    MissingSection(String),

    #[error("Failed to read metadata file: {0}")]
    Read(String),

    #[error("Failed to parse metadata file: {0}")]
    Parse(String),
}

impl MetadataError {
    /// Message safe to return in an error body
    pub fn client_message(&self) -> String {
        match self {
            MetadataError::NotFound(_) => "deepgram.toml file not found".to_string(),
            MetadataError::MissingSection(_) => {
                "Missing [meta] section in deepgram.toml".to_string()
            }
            MetadataError::Read(_) | MetadataError::Parse(_) => {
                "Failed to read metadata from deepgram.toml".to_string()
            }
        }
    }
}

/// Read `path` and return its `[meta]` table as JSON
///
/// # Errors
/// - `NotFound` when the file does not exist
/// - `Read` for any other I/O failure
/// - `Parse` when the file is not valid TOML
/// - `MissingSection` when there is no `[meta]` table
pub async fn load_meta_section(path: impl AsRef<Path>) -> Result<serde_json::Value, MetadataError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            MetadataError::NotFound(shown.clone())
        } else {
            MetadataError::Read(format!("{shown}: {e}"))
        }
    })?;

    let mut table: toml::Table = toml::from_str(&contents)
        .map_err(|e| MetadataError::Parse(format!("{shown}: {e}")))?;

    let meta = match table.remove(META_SECTION) {
        Some(value @ toml::Value::Table(_)) => value,
        _ => return Err(MetadataError::MissingSection(shown.clone())),
    };

    debug!(path = %shown, "Loaded metadata section");

    serde_json::to_value(meta).map_err(|e| MetadataError::Parse(format!("{shown}: {e}")))
}
