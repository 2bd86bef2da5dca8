//! # Page Error Types
//!
//! Config errors carry the file they came from; page errors wrap them.

use std::path::PathBuf;

use gst_tax::TaxError;
use gst_ui::UiError;
use thiserror::Error;

/// Errors raised while loading the page config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape.
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The calculator or currency tables are invalid.
    #[error(transparent)]
    Tax(#[from] TaxError),

    /// The follower table is invalid.
    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Result type for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the page lifecycle.
#[derive(Error, Debug)]
pub enum PageError {
    /// The page was built from an invalid config.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `mount` was called on a page that is already mounted.
    #[error("page is already mounted")]
    AlreadyMounted,
}

/// Result type for page operations.
pub type PageResult<T> = Result<T, PageError>;
