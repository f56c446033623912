use indexmap::IndexMap;
use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    classifier::{Classification, Classifier},
    commit::Commits,
};

/// The top level classification axis of a draft
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Display, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Core,
    Android,
    Ios,
    Other,
}

impl Platform {
    /// The section title used when rendering this platform
    pub fn title(&self) -> &'static str {
        match *self {
            Platform::Core => "Core",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Other => "Other",
        }
    }
}

/// The second classification axis, within a platform
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    Feature,
    Bug,
}

/// The formatted lines of one platform, in commit order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub features: Vec<String>,
    pub bugs: Vec<String>,
}

impl Bucket {
    pub fn lines(&self, kind: Kind) -> &[String] {
        match kind {
            Kind::Feature => &self.features,
            Kind::Bug => &self.bugs,
        }
    }

    fn push(&mut self, kind: Kind, line: String) {
        match kind {
            Kind::Feature => self.features.push(line),
            Kind::Bug => self.bugs.push(line),
        }
    }

    pub fn is_empty(&self) -> bool { self.features.is_empty() && self.bugs.is_empty() }
}

/// The classified commits of a release, i.e. platforms -> features and bugs.
///
/// Every platform is always present, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    sections: IndexMap<Platform, Bucket>,
    /// Commits which are neither a feature nor a bug fix
    pub unclassified: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Draft {
            sections: Platform::iter().map(|p| (p, Bucket::default())).collect(),
            unclassified: Vec::new(),
        }
    }
}

impl Draft {
    /// Creates a draft from a vector of commits, keeping their order within
    /// each bucket
    ///
    /// # Example
    ///
    /// ```
    /// # use release_draft::{Classifier, Commit, Draft, Platform};
    /// let commits = vec![Commit::from_message("Fix ios crash", "u2")];
    /// let draft = Draft::from_commits(commits, &Classifier::default());
    ///
    /// assert_eq!(draft.bucket(Platform::Ios).bugs, vec!["- Fix ios crash - u2"]);
    /// ```
    pub fn from_commits(commits: Commits, classifier: &Classifier) -> Draft {
        commits
            .into_iter()
            .fold(Draft::default(), |mut draft, commit| {
                match classifier.classify(&commit.title) {
                    Classification::Skipped => {}
                    Classification::Unclassified => draft.unclassified.push(commit.entry()),
                    Classification::Bucketed(platform, kind) => {
                        draft.bucket_mut(platform).push(kind, commit.entry())
                    }
                }
                draft
            })
    }

    pub fn bucket(&self, platform: Platform) -> &Bucket { &self.sections[&platform] }

    fn bucket_mut(&mut self, platform: Platform) -> &mut Bucket {
        &mut self.sections[&platform]
    }

    /// Iterates the platform buckets in render order
    pub fn sections(&self) -> impl Iterator<Item = (Platform, &Bucket)> {
        self.sections.iter().map(|(p, b)| (*p, b))
    }

    /// Whether no commit landed in any platform bucket
    pub fn is_empty(&self) -> bool { self.sections.values().all(Bucket::is_empty) }
}
