#![allow(dead_code)]

use sift_lib::{FilePicker, Predictor};
use std::path::{Path, PathBuf};

/// Write a tab-separated file and return its path.
pub fn write_tsv(dir: &Path, name: &str, headers: &[&str], rows: &[&[&str]]) -> PathBuf {
    let path = dir.join(name);
    let mut out = String::new();
    out.push_str(&headers.join("\t"));
    out.push('\n');
    for row in rows {
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    std::fs::write(&path, out).unwrap();
    path
}

/// File picker returning a fixed path, or nothing (operator cancelled).
pub struct FakePicker {
    pub path: Option<PathBuf>,
}

impl FakePicker {
    pub fn cancelled() -> Self {
        Self { path: None }
    }

    pub fn returning(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl FilePicker for FakePicker {
    fn pick_file(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

/// Predictor returning the same label code for every text.
pub struct FixedPredictor {
    pub code: i64,
}

impl Predictor for FixedPredictor {
    fn predict(&self, texts: &[&str]) -> Vec<i64> {
        texts.iter().map(|_| self.code).collect()
    }
}

/// Write a binary linear-scorer artifact. Texts containing "quantum" or
/// "spectra" score positive (class 1), "cats" scores negative (class 4).
pub fn write_scorer_artifact(path: &Path) {
    let artifact = serde_json::json!({
        "vocabulary": {"quantum": 0, "spectra": 1, "cats": 2},
        "coefficients": [[1.5, 0.75, -2.0]],
        "intercepts": [-0.25],
        "classes": [4, 1]
    });
    std::fs::write(path, serde_json::to_string_pretty(&artifact).unwrap()).unwrap();
}
