//! Serialized classifier artifacts.
//!
//! Each catalog entry points at a JSON document describing a linear text
//! scorer: a bag-of-words vocabulary, one coefficient row per class (a single
//! row for the binary case), intercepts, and the label codes the rows decide
//! between. Binary decision follows the usual convention: a positive score
//! picks the second class.

use crate::error::{Result, SiftError};
use crate::model::Predictor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearScorer {
    pub vocabulary: HashMap<String, usize>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    pub classes: Vec<i64>,
}

impl LinearScorer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let scorer: LinearScorer = serde_json::from_str(&raw)?;
        scorer.check_shape()?;
        Ok(scorer)
    }

    fn check_shape(&self) -> Result<()> {
        if self.classes.len() < 2 {
            return Err(SiftError::Artifact(format!(
                "expected at least 2 classes, found {}",
                self.classes.len()
            )));
        }

        let expected_rows = if self.classes.len() == 2 {
            1
        } else {
            self.classes.len()
        };
        if self.coefficients.len() != expected_rows {
            return Err(SiftError::Artifact(format!(
                "expected {} coefficient rows for {} classes, found {}",
                expected_rows,
                self.classes.len(),
                self.coefficients.len()
            )));
        }

        if self.intercepts.len() != self.coefficients.len() {
            return Err(SiftError::Artifact(format!(
                "expected {} intercepts, found {}",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }

        let width = self.vocabulary.len();
        for (i, row) in self.coefficients.iter().enumerate() {
            if row.len() != width {
                return Err(SiftError::Artifact(format!(
                    "coefficient row {} has {} values but the vocabulary has {} terms",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        if self.vocabulary.values().any(|&idx| idx >= width) {
            return Err(SiftError::Artifact(
                "vocabulary index out of range".to_string(),
            ));
        }

        Ok(())
    }

    fn features(&self, text: &str) -> Vec<f64> {
        let mut counts = vec![0.0; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                counts[idx] += 1.0;
            }
        }
        counts
    }

    fn score_one(&self, text: &str) -> i64 {
        let features = self.features(text);
        let scores: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(&features)
                    .map(|(coef, x)| coef * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect();

        if self.classes.len() == 2 {
            if scores[0] > 0.0 {
                self.classes[1]
            } else {
                self.classes[0]
            }
        } else {
            let mut best = 0;
            for (i, score) in scores.iter().enumerate() {
                if *score > scores[best] {
                    best = i;
                }
            }
            self.classes[best]
        }
    }
}

impl Predictor for LinearScorer {
    fn predict(&self, texts: &[&str]) -> Vec<i64> {
        texts.iter().map(|text| self.score_one(text)).collect()
    }
}

/// Lowercased alphanumeric tokens of length >= 2.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(|token| token.to_lowercase())
        .collect()
}
