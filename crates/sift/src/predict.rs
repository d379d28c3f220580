//! Label interpretation for classifier output codes.
//!
//! The label space is a hardcoded contract: code 1 means relevant, code 4
//! means not relevant, anything else is surfaced verbatim as unknown. The
//! specific integers matter and must not be remapped.

use crate::error::{Result, SiftError};
use crate::model::LoadedModel;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Relevant,
    NotRelevant,
    Unknown(i64),
}

impl Label {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Label::Relevant,
            4 => Label::NotRelevant,
            other => Label::Unknown(other),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Relevant => write!(f, "SCIENTIFICALLY RELEVANT"),
            Label::NotRelevant => write!(f, "NOT SCIENTIFICALLY RELEVANT"),
            Label::Unknown(code) => write!(f, "Unknown label ({})", code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub code: i64,
    pub label: Label,
}

/// Run the model on a single-element batch and interpret the first result.
pub fn predict_text(model: &LoadedModel, text: &str) -> Result<Prediction> {
    let codes = model.predict(&[text]);
    let code = codes.first().copied().ok_or_else(|| {
        SiftError::Prediction(format!(
            "model {} returned no result for the input batch",
            model.name()
        ))
    })?;

    Ok(Prediction {
        code,
        label: Label::from_code(code),
    })
}
