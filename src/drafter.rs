use std::{
    env,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    branch::{select_stable_pair, StablePair},
    classifier::Classifier,
    config::RawCfg,
    draft::Draft,
    error::{Error, Result},
    fmt::{DraftContext, DraftFormat, FormatWriter, JsonWriter, MarkdownWriter},
    github::GitHubClient,
    DEFAULT_CONFIG_FILE,
};

/// The base struct used to set options and produce a release notes draft.
#[derive(Debug, Clone)]
pub struct Drafter {
    /// The REST API root (Defaults to: "https://api.github.com")
    pub api_host: String,
    /// The `owner/name` of the repository (Defaults to:
    /// "facebook/react-native")
    pub repository: String,
    /// The file the draft is written to, replacing any previous content
    /// (Defaults to: "draft.md")
    pub outfile: String,
    /// The product name used in the introduction (Defaults to: "React
    /// Native")
    pub project_name: String,
    /// The format to output the draft in (Defaults to Markdown)
    pub out_format: DraftFormat,
    /// The keyword heuristics commits are sorted with
    pub classifier: Classifier,
}

/// A classified draft along with what it was built from
#[derive(Debug, Clone)]
pub struct Release {
    pub branches: StablePair,
    pub context: DraftContext,
    pub draft: Draft,
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct Summary {
    pub branches: StablePair,
    pub total_commits: u64,
    pub outfile: PathBuf,
}

impl Default for Drafter {
    fn default() -> Self {
        debug!("Creating default drafter with Drafter::default()");
        Drafter {
            api_host: "https://api.github.com".to_owned(),
            repository: "facebook/react-native".to_owned(),
            outfile: "draft.md".to_owned(),
            project_name: "React Native".to_owned(),
            out_format: DraftFormat::Markdown,
            classifier: Classifier::default(),
        }
    }
}

impl Drafter {
    /// Creates a `Drafter` with the default options, overridden by the
    /// `.draft.toml` file of the current directory if there is one.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use release_draft::Drafter;
    /// let drafter = Drafter::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        debug!("Creating default drafter with new()");
        let cwd = env::current_dir().map_err(|_| Error::CurrentDir)?;
        let cfg_file = cwd.join(DEFAULT_CONFIG_FILE);
        if cfg_file.is_file() {
            Drafter::from_file(cfg_file)
        } else {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Drafter::default())
        }
    }

    /// Creates a `Drafter` from a TOML configuration file, which must exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use release_draft::Drafter;
    /// let drafter = Drafter::from_file("/myproject/.draft.toml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        debug!("Creating drafter with \n\tfile: {:?}", file.as_ref());
        let toml_s = fs::read_to_string(file.as_ref())?;
        Drafter::default().try_config_str(&toml_s, file.as_ref())
    }

    fn try_config_str(mut self, toml_s: &str, cfg_file: &Path) -> Result<Self> {
        let cfg: RawCfg =
            toml::from_str(toml_s).map_err(|e| Error::ConfigParse(cfg_file.to_path_buf(), e))?;
        let raw = cfg.draft;

        if let Some(host) = raw.api_host {
            self.api_host = host;
        }
        if let Some(repo) = raw.repository {
            self.repository = repo;
        }
        if let Some(outfile) = raw.outfile {
            self.outfile = outfile;
        }
        if let Some(name) = raw.project_name {
            self.project_name = name;
        }
        if let Some(format) = raw.output_format {
            self.out_format = format;
        }

        debug!("Returning drafter:\n{:?}", self);
        Ok(self)
    }

    /// Sets the REST API root
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use release_draft::Drafter;
    /// let drafter = Drafter::default().api_host("https://github.example.com/api/v3");
    /// ```
    pub fn api_host<S: Into<String>>(mut self, h: S) -> Drafter {
        self.api_host = h.into();
        self
    }

    /// Sets the repository, as `owner/name`
    ///
    /// **NOTE:** Anything set here will override anything in a configuration
    /// TOML file
    pub fn repository<S: Into<String>>(mut self, r: S) -> Drafter {
        self.repository = r.into();
        self
    }

    /// Sets the file the draft is written to
    pub fn outfile<S: Into<String>>(mut self, o: S) -> Drafter {
        self.outfile = o.into();
        self
    }

    pub fn project_name<S: Into<String>>(mut self, n: S) -> Drafter {
        self.project_name = n.into();
        self
    }

    /// The format of output for the draft (Defaults to Markdown)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use release_draft::{fmt::DraftFormat, Drafter};
    /// let drafter = Drafter::default().output_format(DraftFormat::Json);
    /// ```
    pub fn output_format(mut self, f: DraftFormat) -> Drafter {
        self.out_format = f;
        self
    }

    fn client(&self) -> GitHubClient {
        GitHubClient::new(self.api_host.clone(), self.repository.clone())
    }

    /// Fetches the two latest stable branches and the commits between them,
    /// and classifies those commits.
    pub async fn build_draft(&self) -> Result<Release> {
        let client = self.client();

        let branches = client.list_branches().await?;
        let pair = select_stable_pair(&branches)?;
        info!("Drafting {} -> {}", pair.older, pair.newer);

        let cmp = client.compare(&pair.older, &pair.newer).await?;
        let context = DraftContext {
            project: self.project_name.clone(),
            version: pair.newer.clone(),
            compare_url: cmp.html_url.clone(),
            total_commits: cmp.total_commits,
        };
        let draft = Draft::from_commits(cmp.into_commits(), &self.classifier);

        Ok(Release {
            branches: pair,
            context,
            draft,
        })
    }

    /// Runs the whole pipeline and writes the draft to the configured
    /// outfile.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use release_draft::Drafter;
    /// # async fn run() -> release_draft::error::Result<()> {
    /// let summary = Drafter::new()?.run().await?;
    /// println!("wrote {:?}", summary.outfile);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(&self) -> Result<Summary> {
        let release = self.build_draft().await?;
        self.write_draft_to(&self.outfile, &release.context, &release.draft)?;

        Ok(Summary {
            branches: release.branches,
            total_commits: release.context.total_commits,
            outfile: PathBuf::from(&self.outfile),
        })
    }

    /// Writes a draft to a file, replacing its contents if it exists.
    pub fn write_draft_to<P: AsRef<Path>>(
        &self,
        out: P,
        context: &DraftContext,
        draft: &Draft,
    ) -> Result<()> {
        debug!("Writing draft to file: {:?}", out.as_ref());
        let mut buf = BufWriter::new(File::create(out.as_ref())?);
        match self.out_format {
            DraftFormat::Markdown => {
                let mut writer = MarkdownWriter::new(&mut buf);
                self.write_draft_with(&mut writer, context, draft)
            }
            DraftFormat::Json => {
                let mut writer = JsonWriter::new(&mut buf);
                self.write_draft_with(&mut writer, context, draft)
            }
        }
    }

    /// Writes a draft with a specified `FormatWriter` format
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use release_draft::{Drafter, Draft, fmt::{DraftContext, MarkdownWriter}};
    /// # use std::io;
    /// # let context = DraftContext {
    /// #     project: "React Native".into(),
    /// #     version: "0.22-stable".into(),
    /// #     compare_url: String::new(),
    /// #     total_commits: 0,
    /// # };
    /// let drafter = Drafter::default();
    ///
    /// // Write the draft to stdout in Markdown format
    /// let out = io::stdout();
    /// let mut out_buf = io::BufWriter::new(out.lock());
    /// let mut writer = MarkdownWriter::new(&mut out_buf);
    ///
    /// drafter.write_draft_with(&mut writer, &context, &Draft::default()).unwrap();
    /// ```
    pub fn write_draft_with<W>(&self, writer: &mut W, context: &DraftContext, draft: &Draft) -> Result<()>
    where
        W: FormatWriter,
    {
        debug!("Writing draft from writer");
        writer.write_draft(context, draft)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mockito::{Mock, Server, ServerGuard};
    use serde_json::json;

    use super::*;

    // mocks are removed once dropped, so they are handed back with the server
    async fn mock_repo(branches: serde_json::Value) -> (ServerGuard, Vec<Mock>) {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/repos/facebook/react-native/branches")
            .with_status(200)
            .with_body(branches.to_string())
            .create_async()
            .await;
        let compare = server
            .mock(
                "GET",
                "/repos/facebook/react-native/compare/0.21-stable...0.22-stable",
            )
            .with_status(200)
            .with_body(
                json!({
                    "html_url": "https://github.com/facebook/react-native/compare/0.21-stable...0.22-stable",
                    "total_commits": 3,
                    "commits": [
                        {"html_url": "u1", "commit": {"message": "Add android support for X"}},
                        {"html_url": "u2", "commit": {"message": "Fix ios crash\n\nSummary"}},
                        {"html_url": "u3", "commit": {"message": "showcase new demo"}}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;
        (server, vec![list, compare])
    }

    fn stable_branches() -> serde_json::Value {
        json!([
            {"name": "0.20-stable"},
            {"name": "master"},
            {"name": "0.21-stable"},
            {"name": "0.22-stable"}
        ])
    }

    #[test]
    fn defaults() {
        let d = Drafter::default();
        assert_eq!(d.api_host, "https://api.github.com");
        assert_eq!(d.repository, "facebook/react-native");
        assert_eq!(d.outfile, "draft.md");
        assert_eq!(d.out_format, DraftFormat::Markdown);
    }

    #[test]
    fn from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join(".draft.toml");
        fs::write(&cfg, "[draft]\nrepository = \"acme/widgets\"\noutput-format = \"JSON\"\n").unwrap();

        let d = Drafter::from_file(&cfg).unwrap();
        assert_eq!(d.repository, "acme/widgets");
        assert_eq!(d.out_format, DraftFormat::Json);
        assert_eq!(d.outfile, "draft.md");
    }

    #[test]
    fn from_file_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join(".draft.toml");
        fs::write(&cfg, "[draft\n").unwrap();

        let err = Drafter::from_file(&cfg).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(ref p, _) if p == &cfg));
    }

    #[test]
    fn from_file_requires_file() {
        let err = Drafter::from_file("/nonexistent/.draft.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn run_writes_markdown() {
        let (server, _mocks) = mock_repo(stable_branches()).await;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("draft.md");
        fs::write(&out, "stale content").unwrap();

        let summary = Drafter::default()
            .api_host(server.url())
            .outfile(out.to_string_lossy())
            .run()
            .await
            .unwrap();

        assert_eq!(summary.branches.older, "0.21-stable");
        assert_eq!(summary.branches.newer, "0.22-stable");
        assert_eq!(summary.total_commits, 3);

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with(
            "Thanks to X contributors who put [3 commits](https://github.com/facebook/react-native/compare/0.21-stable...0.22-stable) into **React Native 0.22-stable**!\n\n"
        ));
        assert!(text.contains("### New features\n\n- Add android support for X - u1\n"));
        assert!(text.contains("### Bug fixes\n\n- Fix ios crash - u2\n"));
        assert!(!text.contains("u3"));
        assert!(!text.contains("stale content"));
    }

    #[tokio::test]
    async fn run_writes_json() {
        let (server, _mocks) = mock_repo(stable_branches()).await;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("draft.json");

        Drafter::default()
            .api_host(server.url())
            .outfile(out.to_string_lossy())
            .output_format(DraftFormat::Json)
            .run()
            .await
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["version"], "0.22-stable");
        assert_eq!(value["sections"]["ios"]["bugs"], json!(["- Fix ios crash - u2"]));
    }

    #[tokio::test]
    async fn run_fails_without_two_stable_branches() {
        let (server, _mocks) = mock_repo(json!([{"name": "master"}, {"name": "0.22-stable"}])).await;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("draft.md");

        let err = Drafter::default()
            .api_host(server.url())
            .outfile(out.to_string_lossy())
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InsufficientBranches { found: 1 }));
        assert!(!out.exists());
    }
}
