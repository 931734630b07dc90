//! CSV persistence for [`Dataset`].
//!
//! Writes go to a sibling temp file that is renamed over the target, so a
//! crashed run never leaves a half-written file. Two runs saving the same
//! path concurrently still race: the last rename wins.

use crate::config::MergeMode;
use crate::dataset::{Dataset, DatasetError, Record};
use csv::{ReaderBuilder, Writer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl Dataset {
    /// Read a CSV previously written by [`Dataset::write`]. Empty cells are
    /// dropped so columns stay sparse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| DatasetError::csv(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::csv(path, e))?
            .clone();

        let mut dataset = Dataset::new();
        for row in reader.records() {
            let row = row.map_err(|e| DatasetError::csv(path, e))?;
            dataset.push(Record::from_pairs(headers.iter().zip(row.iter())));
        }

        debug!(path = %path.display(), rows = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Like [`Dataset::load`] but a missing file is an empty dataset.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(_) => Self::load(path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(DatasetError::io(path, e)),
        }
    }

    /// Write this dataset as the whole file, header row first.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let headers = self.headers();
        let tmp_path = temp_path(path);

        let mut wtr = Writer::from_path(&tmp_path).map_err(|e| DatasetError::csv(&tmp_path, e))?;
        wtr.write_record(&headers)
            .map_err(|e| DatasetError::csv(&tmp_path, e))?;

        for record in self.records() {
            let row = headers.iter().map(|h| record.get(h).unwrap_or(""));
            wtr.write_record(row)
                .map_err(|e| DatasetError::csv(&tmp_path, e))?;
        }

        wtr.flush().map_err(|e| DatasetError::io(&tmp_path, e))?;
        drop(wtr);

        fs::rename(&tmp_path, path).map_err(|e| DatasetError::io(path, e))?;
        Ok(())
    }

    /// Persist this run's rows according to `mode`; returns the number of
    /// rows in the file afterwards.
    pub fn save(&self, path: impl AsRef<Path>, mode: MergeMode) -> Result<usize, DatasetError> {
        let path = path.as_ref();

        let merged = match mode {
            MergeMode::Overwrite => self.clone(),
            MergeMode::Append | MergeMode::ReplaceByKey => {
                let mut existing = Dataset::load_or_default(path)?;
                existing.extend(self.clone());
                if mode == MergeMode::ReplaceByKey {
                    existing.dedup_by_website();
                }
                existing
            }
        };

        merged.write(path)?;
        info!(
            path = %path.display(),
            mode = ?mode,
            new_rows = self.len(),
            total_rows = merged.len(),
            "dataset saved"
        );
        Ok(merged.len())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
