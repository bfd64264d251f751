use sewna_common::{Result, SewnaError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::types::DesignerRecord;

/// JSON-file designer catalog
///
/// Records keep insertion order; every mutation is written straight back.
pub struct CatalogStore {
    records: Vec<DesignerRecord>,
    file_path: PathBuf,
}

impl CatalogStore {
    /// Load the catalog at `path`, or start empty if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        let records: Vec<DesignerRecord> = if path.exists() {
            let data = fs::read_to_string(path)?;
            serde_json::from_str(&data).map_err(|e| {
                SewnaError::catalog(format!(
                    "Failed to parse catalog {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            Vec::new()
        };

        debug!("Loaded {} designers from {}", records.len(), path.display());

        Ok(Self {
            records,
            file_path: path.to_path_buf(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DesignerRecord] {
        &self.records
    }

    /// Append a record; memory is only updated once the file is written
    pub fn insert(&mut self, record: DesignerRecord) -> Result<()> {
        self.records.push(record);
        if let Err(e) = self.save(&self.records) {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove every record
    pub fn clear(&mut self) -> Result<usize> {
        self.save(&[])?;
        let removed = self.records.len();
        self.records.clear();
        Ok(removed)
    }

    fn save(&self, records: &[DesignerRecord]) -> Result<()> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(records)?;
        fs::write(&self.file_path, data)?;
        Ok(())
    }
}
