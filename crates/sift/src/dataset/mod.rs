//! Labeled text datasets and the validation contract they must satisfy.
//!
//! A dataset is an ordered table parsed from tab-separated text. Exactly two
//! columns are required: `text` (the free-form string shown while browsing and
//! sent to the classifier) and `link_accessibility` (checked for presence
//! only). All other columns are carried through untouched so a cached copy
//! round-trips.

pub mod picker;
pub mod store;

use crate::error::{Result, SiftError};

pub const TEXT_COLUMN: &str = "text";
pub const LINK_COLUMN: &str = "link_accessibility";

#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    text_idx: usize,
}

impl Dataset {
    /// Build a dataset from parsed tabular data. Rejects the whole table if a
    /// required column is missing; no partial dataset is ever returned.
    pub fn from_table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let text_idx = headers
            .iter()
            .position(|h| h == TEXT_COLUMN)
            .ok_or(SiftError::MissingColumn(TEXT_COLUMN))?;

        if !headers.iter().any(|h| h == LINK_COLUMN) {
            return Err(SiftError::MissingColumn(LINK_COLUMN));
        }

        Ok(Self {
            headers,
            rows,
            text_idx,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Full, untruncated text of row `index`.
    pub fn text(&self, index: usize) -> Option<&str> {
        self.rows
            .get(index)
            .and_then(|row| row.get(self.text_idx))
            .map(String::as_str)
    }
}
