use log::debug;
use regex::Regex;

use crate::draft::{Kind, Platform};

/// Where a single commit title lands in a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Showcase commits never appear in the draft
    Skipped,
    /// Neither a feature nor a bug fix
    Unclassified,
    Bucketed(Platform, Kind),
}

/// The keyword heuristics used to sort commit titles into platform buckets.
///
/// All patterns are matched against the lowercased title, and at each level
/// the first matching pattern wins: iOS, then Android, then core, then
/// other; feature before bug.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Titles matching this are dropped entirely
    pub skip_regex: Regex,
    pub ios_regex: Regex,
    pub android_regex: Regex,
    pub core_regex: Regex,
    pub feature_regex: Regex,
    pub bug_regex: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            skip_regex: regex!("showcase"),
            // `rct'` keeps the trailing quote of the historical pattern
            ios_regex: regex!(r"ios|rct'"),
            android_regex: regex!(r"android|java"),
            core_regex: regex!(r"packager"),
            feature_regex: regex!(r"add"),
            bug_regex: regex!(r"fix"),
        }
    }
}

impl Classifier {
    /// Retrieves the platform bucket for a commit title
    ///
    /// # Example
    ///
    /// ```
    /// # use release_draft::{Classifier, Platform};
    /// let c = Classifier::default();
    /// assert_eq!(c.platform_for("Fix Java bridge on iOS"), Platform::Ios);
    /// ```
    pub fn platform_for(&self, title: &str) -> Platform {
        let lower = title.to_lowercase();
        if self.ios_regex.is_match(&lower) {
            Platform::Ios
        } else if self.android_regex.is_match(&lower) {
            Platform::Android
        } else if self.core_regex.is_match(&lower) {
            Platform::Core
        } else {
            Platform::Other
        }
    }

    /// Retrieves the change kind for a commit title, if it has one
    pub fn kind_for(&self, title: &str) -> Option<Kind> {
        let lower = title.to_lowercase();
        if self.feature_regex.is_match(&lower) {
            Some(Kind::Feature)
        } else if self.bug_regex.is_match(&lower) {
            Some(Kind::Bug)
        } else {
            None
        }
    }

    pub fn classify(&self, title: &str) -> Classification {
        if self.skip_regex.is_match(&title.to_lowercase()) {
            debug!("Skipping showcase commit: {:?}", title);
            return Classification::Skipped;
        }

        let platform = self.platform_for(title);
        match self.kind_for(title) {
            Some(kind) => Classification::Bucketed(platform, kind),
            None => {
                debug!("No kind for {} commit: {:?}", platform, title);
                Classification::Unclassified
            }
        }
    }
}
