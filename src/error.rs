use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

pub type Result<T> = StdResult<T, Error>;

/// An enum for describing and handling the errors encountered while fetching
/// branches and commits, or while writing the release notes draft.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse config file: {0}")]
    ConfigParse(PathBuf, #[source] toml::de::Error),

    #[error("cannot get current directory")]
    CurrentDir,

    #[error("found {found} stable branch(es), at least two are needed to compare")]
    InsufficientBranches { found: usize },

    #[error("request to {url} failed with status {status}")]
    Api {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("network request failed")]
    Http(#[from] reqwest::Error),

    #[error("malformed JSON in API response")]
    Json(#[from] serde_json::Error),

    #[error("fatal I/O error with output file")]
    Io(#[from] std::io::Error),
}
