use serde::Deserialize;

use crate::fmt::DraftFormat;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCfg {
    #[serde(default)]
    pub draft: RawDraftCfg,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawDraftCfg {
    pub api_host: Option<String>,
    pub repository: Option<String>,
    pub outfile: Option<String>,
    pub project_name: Option<String>,
    pub output_format: Option<DraftFormat>,
}
