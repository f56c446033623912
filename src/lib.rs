//! Drafts release notes from the commits between the two latest stable
//! branches of a GitHub repository.
//!
//! The pipeline lists the repository branches, picks the last two `-stable`
//! ones, fetches the comparison between them, sorts each commit title into
//! a platform and kind bucket, and writes the buckets as a Markdown (or
//! JSON) document.

#[macro_use]
mod macros;
pub mod branch;
mod classifier;
mod commit;
pub mod config;
mod draft;
mod drafter;
pub mod error;
pub mod fmt;
pub mod github;

pub use classifier::{Classification, Classifier};
pub use commit::{Commit, Commits};
pub use draft::{Bucket, Draft, Kind, Platform};
pub use drafter::{Drafter, Release, Summary};

// The optional config file
const DEFAULT_CONFIG_FILE: &str = ".draft.toml";
