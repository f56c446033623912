mod json_writer;
mod md_writer;

use std::{result::Result as StdResult, str::FromStr};

use serde::Serialize;
use strum::{Display, EnumString};

pub use self::{json_writer::JsonWriter, md_writer::MarkdownWriter};
use crate::{draft::Draft, error::Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum DraftFormat {
    Json,
    #[default]
    Markdown,
}

impl<'de> serde::de::Deserialize<'de> for DraftFormat {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// What a draft is about: the release and the comparison it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftContext {
    /// The product name used in the introduction, e.g. `React Native`
    pub project: String,
    /// The release label, the newer of the compared branches
    pub version: String,
    /// The web page comparing both branches
    pub compare_url: String,
    pub total_commits: u64,
}

/// A trait that allows writing a classified `Draft` in an arbitrary format.
///
/// `release_draft` provides two implementors of this trait,
/// `release_draft::fmt::MarkdownWriter` and `release_draft::fmt::JsonWriter`
pub trait FormatWriter {
    /// Writes the release notes draft for the given context
    fn write_draft(&mut self, context: &DraftContext, draft: &Draft) -> Result<()>;
}
