pub mod browse;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod predict;
pub mod session;

pub use browse::{BrowseCommand, BrowseState, RowBrowser};
pub use config::{Config, ConfigOverrides};
pub use dataset::picker::{DialogPicker, FilePicker};
pub use dataset::store::{AcquireMode, Acquired, DatasetStore};
pub use dataset::Dataset;
pub use error::{Result, SiftError};
pub use model::{CatalogEntry, LoadedModel, ModelCatalog, Predictor};
pub use predict::{predict_text, Label, Prediction};
pub use session::Session;
