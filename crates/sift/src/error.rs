use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset must contain a '{0}' column")]
    MissingColumn(&'static str),

    #[error("Invalid model artifact: {0}")]
    Artifact(String),

    #[error("Unknown model key: {0}")]
    UnknownModel(String),

    #[error("Failed to load model {name} from {}: {message}", .path.display())]
    ModelLoad {
        name: String,
        path: PathBuf,
        message: String,
    },

    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error("User input error: {0}")]
    UserInput(String),
}

impl From<dialoguer::Error> for SiftError {
    fn from(err: dialoguer::Error) -> Self {
        SiftError::UserInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiftError>;
