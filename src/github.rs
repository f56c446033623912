use log::{debug, info};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    branch::Branch,
    commit::{Commit, CommitRecord, Commits},
    error::{Error, Result},
};

const CLIENT_USER_AGENT: &str = concat!("release-draft/", env!("CARGO_PKG_VERSION"));

/// The response of the compare endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    /// The web page comparing both branches
    pub html_url: String,
    pub total_commits: u64,
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
}

impl Comparison {
    /// Converts the raw commit records, keeping the API order
    pub fn into_commits(self) -> Commits { self.commits.into_iter().map(Commit::from).collect() }
}

/// A minimal client for the repository endpoints of the GitHub REST API
pub struct GitHubClient {
    http: reqwest::Client,
    api_host: String,
    repository: String,
}

impl GitHubClient {
    /// Creates a client for `repository` (`owner/name`) against `api_host`,
    /// e.g. `https://api.github.com`
    pub fn new<S: Into<String>>(api_host: S, repository: S) -> GitHubClient {
        GitHubClient {
            http: reqwest::Client::new(),
            api_host: api_host.into().trim_end_matches('/').to_owned(),
            repository: repository.into(),
        }
    }

    fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}/{path}", self.api_host, self.repository)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api { status, url });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    /// Lists the branches of the repository, in API order
    pub async fn list_branches(&self) -> Result<Vec<Branch>> {
        let branches: Vec<Branch> = self.get_json(self.repo_url("branches")).await?;
        info!("Listed {} branches of {}", branches.len(), self.repository);
        Ok(branches)
    }

    /// Fetches the commits reachable from `newer` but not from `older`
    pub async fn compare(&self, older: &str, newer: &str) -> Result<Comparison> {
        let cmp: Comparison = self
            .get_json(self.repo_url(&format!("compare/{older}...{newer}")))
            .await?;
        info!(
            "Compared {}...{}: {} commits ({} listed)",
            older,
            newer,
            cmp.total_commits,
            cmp.commits.len()
        );
        Ok(cmp)
    }
}
