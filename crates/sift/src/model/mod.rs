//! The fixed model catalog and artifact loading.
//!
//! Four classifiers are enumerated at startup under the stable keys "1"–"4".
//! Resolving a key deserializes its artifact fresh every time; nothing is
//! cached across predictions.

pub mod artifact;

use crate::error::{Result, SiftError};
use artifact::LinearScorer;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque predictor capability: a batch of texts in, one label code per text
/// out. Tests substitute their own implementations.
pub trait Predictor {
    fn predict(&self, texts: &[&str]) -> Vec<i64>;
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub key: String,
    pub name: String,
    pub artifact_path: PathBuf,
}

pub struct ModelCatalog {
    entries: Vec<CatalogEntry>,
}

impl ModelCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The four builtin classifiers, artifacts resolved under `models_dir`.
    pub fn builtin(models_dir: &Path) -> Self {
        let builtin = [
            ("1", "LinearSVC", "linear_svc.json"),
            ("2", "SGD-Logistic", "sgd_logistic.json"),
            ("3", "ComplementNB", "complement_nb.json"),
            ("4", "RidgeClassifier", "ridge_classifier.json"),
        ];

        Self::new(
            builtin
                .iter()
                .map(|(key, name, file)| CatalogEntry {
                    key: key.to_string(),
                    name: name.to_string(),
                    artifact_path: models_dir.join(file),
                })
                .collect(),
        )
    }

    /// Entries in stable key order, for display.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Look up a key and load its artifact. An unknown key is recoverable
    /// (caller re-prompts); a missing or corrupt artifact fails with the
    /// model's name and location.
    pub fn resolve(&self, key: &str) -> Result<LoadedModel> {
        let entry = self
            .get(key)
            .ok_or_else(|| SiftError::UnknownModel(key.to_string()))?;

        let scorer = LinearScorer::from_file(&entry.artifact_path).map_err(|err| {
            SiftError::ModelLoad {
                name: entry.name.clone(),
                path: entry.artifact_path.clone(),
                message: err.to_string(),
            }
        })?;

        info!(
            "Loaded model {} from {}",
            entry.name,
            entry.artifact_path.display()
        );

        Ok(LoadedModel::new(&entry.name, Box::new(scorer)))
    }
}

/// A predictor bound to one catalog entry, owned by the prediction that
/// requested it.
pub struct LoadedModel {
    name: String,
    predictor: Box<dyn Predictor>,
}

impl LoadedModel {
    pub fn new(name: &str, predictor: Box<dyn Predictor>) -> Self {
        Self {
            name: name.to_string(),
            predictor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn predict(&self, texts: &[&str]) -> Vec<i64> {
        self.predictor.predict(texts)
    }
}

impl fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
