use crate::error::{Result, SiftError};
use serde::Deserialize;
use std::path::PathBuf;
use xdg::BaseDirectories;

pub const DEFAULT_DATABASE: &str = "database.tsv";
pub const DEFAULT_MODELS_DIR: &str = "models";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PREVIEW_CHARS: usize = 80;

/// Runtime settings for one session. Resolution order per field:
/// explicit override > environment > XDG config file > default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub models_dir: PathBuf,
    pub page_size: usize,
    pub preview_chars: usize,
}

/// Values supplied on the command line.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub database: Option<PathBuf>,
    pub models_dir: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub preview_chars: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    database: Option<PathBuf>,
    models_dir: Option<PathBuf>,
    page_size: Option<usize>,
    preview_chars: Option<usize>,
}

impl Config {
    pub fn new(overrides: ConfigOverrides) -> Result<Self> {
        let file = load_config_file()?;

        let database_path = overrides
            .database
            .or_else(|| std::env::var("SIFT_DATABASE").ok().map(PathBuf::from))
            .or(file.database)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        let models_dir = overrides
            .models_dir
            .or_else(|| std::env::var("SIFT_MODELS_DIR").ok().map(PathBuf::from))
            .or(file.models_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODELS_DIR));

        // A zero page size would make pagination meaningless.
        let page_size = overrides
            .page_size
            .or(file.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .max(1);

        let preview_chars = overrides
            .preview_chars
            .or(file.preview_chars)
            .unwrap_or(DEFAULT_PREVIEW_CHARS);

        Ok(Self {
            database_path,
            models_dir,
            page_size,
            preview_chars,
        })
    }
}

fn load_config_file() -> Result<ConfigFile> {
    let path = BaseDirectories::with_prefix("sift")
        .ok()
        .and_then(|xdg| xdg.find_config_file("config.toml"));

    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            toml::from_str(&raw).map_err(|e| {
                SiftError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        }
        None => Ok(ConfigFile::default()),
    }
}
