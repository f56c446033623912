use serde::Deserialize;

/// The struct representation of a `Commit` as it is used for classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The first line of the commit message
    pub title: String,
    /// The web page of the commit
    pub url: String,
}

/// A convienience type for multiple commits
pub type Commits = Vec<Commit>;

impl Commit {
    /// Builds a `Commit` from a full commit message, keeping only its first
    /// line as the title.
    ///
    /// # Example
    ///
    /// ```
    /// # use release_draft::Commit;
    /// let c = Commit::from_message("Fix crash\n\nLonger body", "https://example.com/c/1");
    /// assert_eq!(c.title, "Fix crash");
    /// ```
    pub fn from_message<S: Into<String>>(message: &str, url: S) -> Commit {
        Commit {
            title: message.lines().next().unwrap_or("").to_owned(),
            url: url.into(),
        }
    }

    /// The line this commit contributes to a draft bucket
    pub fn entry(&self) -> String {
        format!("- {} - {}", self.title, self.url)
    }
}

/// A commit object as returned by the compare endpoint. Author, date and
/// tree metadata are not deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    pub commit: CommitDetails,
    pub html_url: String,
}

/// The nested commit details of a `CommitRecord`
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetails {
    pub message: String,
}

impl From<CommitRecord> for Commit {
    fn from(rec: CommitRecord) -> Self {
        Commit::from_message(&rec.commit.message, rec.html_url)
    }
}
