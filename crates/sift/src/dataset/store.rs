//! The dataset repository: a single flat TSV cache plus import-from-file.

use crate::dataset::picker::FilePicker;
use crate::dataset::Dataset;
use crate::error::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireMode {
    /// Read the persisted cache written by a previous import.
    Reuse,
    /// Pick a source file, validate it, and cache a copy.
    Import,
}

/// Outcome of one acquisition attempt. `NoCache` and `Cancelled` are normal
/// named outcomes, not errors; parse and validation failures surface as `Err`.
#[derive(Debug)]
pub enum Acquired {
    Dataset(Dataset),
    NoCache,
    Cancelled,
}

pub struct DatasetStore {
    cache_path: PathBuf,
}

impl DatasetStore {
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn acquire(&self, mode: AcquireMode, picker: &dyn FilePicker) -> Result<Acquired> {
        match mode {
            AcquireMode::Reuse => {
                if !self.cache_path.exists() {
                    debug!("No cache at {}", self.cache_path.display());
                    return Ok(Acquired::NoCache);
                }
                info!("Loading dataset from {}", self.cache_path.display());
                Ok(Acquired::Dataset(read_tsv(&self.cache_path)?))
            }
            AcquireMode::Import => {
                let source = match picker.pick_file() {
                    Some(path) => path,
                    None => return Ok(Acquired::Cancelled),
                };
                let dataset = read_tsv(&source)?;
                self.write_cache(&dataset)?;
                info!(
                    "Dataset imported from {} and cached at {}",
                    source.display(),
                    self.cache_path.display()
                );
                Ok(Acquired::Dataset(dataset))
            }
        }
    }

    /// Persist the dataset to the cache path, replacing any previous copy.
    /// Same delimiter as the reader, header row first, so re-reading yields
    /// the same rows in the same order.
    pub fn write_cache(&self, dataset: &Dataset) -> Result<()> {
        if let Some(parent) = self.cache_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(&self.cache_path)?;
        writer.write_record(dataset.headers())?;
        for row in dataset.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Parse a tab-separated file and validate the required columns.
pub fn read_tsv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Dataset::from_table(headers, rows)
}
