use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ListRecord;
use crate::error::StoreError;

/// On-disk layout. Keys other than `global` are ignored.
#[derive(Serialize, Deserialize)]
struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    global: Option<String>,
}

/// Shared list kept in a small JSON document: `{"global": "<text>"}`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<ListRecord>, StoreError> {
        tracing::trace!(path = %self.path.display(), "Loading list");
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No list saved yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let doc: Document = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(doc.global.map(ListRecord::new))
    }

    /// Replace the stored document. Readers see the old or the new file,
    /// never a partial one.
    pub fn save(&self, record: &ListRecord) -> Result<(), StoreError> {
        tracing::debug!(path = %self.path.display(), "Saving list");
        let doc = Document {
            global: Some(record.text.clone()),
        };
        let mut data = serde_json::to_vec_pretty(&doc).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source: source.into(),
        })?;
        data.push(b'\n');
        self.atomic_write(&data).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn atomic_write(&self, data: &[u8]) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
