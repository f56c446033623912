use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// The substring marking a release maintenance branch
pub const STABLE_MARKER: &str = "-stable";

/// A branch as listed by the hosting API; only the name is used
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Branch {
    pub name: String,
}

impl Branch {
    pub fn new<S: Into<String>>(name: S) -> Branch { Branch { name: name.into() } }

    pub fn is_stable(&self) -> bool { self.name.contains(STABLE_MARKER) }

    // "0.21-stable" -> [0, 21]
    fn version_key(&self) -> Option<Vec<u64>> {
        let (prefix, _) = self.name.split_once(STABLE_MARKER)?;
        prefix
            .split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect()
    }
}

/// The two most recent stable branches, the range a draft covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StablePair {
    pub older: String,
    pub newer: String,
}

/// Picks the last two stable branches out of the listed ones.
///
/// Stable branches are kept in listing order unless every one of them
/// carries a numeric version prefix, in which case they are ordered by that
/// version (ties keep listing order).
///
/// # Example
///
/// ```
/// # use release_draft::branch::{select_stable_pair, Branch};
/// let branches = ["0.20-stable", "master", "0.21-stable", "0.22-stable"]
///     .into_iter()
///     .map(Branch::new)
///     .collect::<Vec<_>>();
/// let pair = select_stable_pair(&branches).unwrap();
///
/// assert_eq!(pair.older, "0.21-stable");
/// assert_eq!(pair.newer, "0.22-stable");
/// ```
pub fn select_stable_pair(branches: &[Branch]) -> Result<StablePair> {
    let mut stable = branches.iter().filter(|b| b.is_stable()).collect::<Vec<_>>();
    debug!("Found {} stable branch(es) out of {}", stable.len(), branches.len());

    if stable.len() < 2 {
        return Err(Error::InsufficientBranches {
            found: stable.len(),
        });
    }

    if stable.iter().all(|b| b.version_key().is_some()) {
        stable.sort_by_cached_key(|b| b.version_key());
    } else {
        debug!("Non-numeric stable branch names, keeping listing order");
    }

    let newer = stable[stable.len() - 1];
    let older = stable[stable.len() - 2];
    Ok(StablePair {
        older: older.name.clone(),
        newer: newer.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branches(names: &[&str]) -> Vec<Branch> { names.iter().map(|n| Branch::new(*n)).collect() }

    #[test]
    fn last_two_stable() {
        let pair =
            select_stable_pair(&branches(&["0.20-stable", "master", "0.21-stable", "0.22-stable"]))
                .unwrap();
        assert_eq!(
            pair,
            StablePair {
                older: "0.21-stable".into(),
                newer: "0.22-stable".into(),
            }
        );
    }

    #[test]
    fn orders_by_numeric_version() {
        // lexicographic listing puts 0.9 after 0.10
        let pair =
            select_stable_pair(&branches(&["0.10-stable", "0.11-stable", "0.8-stable", "0.9-stable"]))
                .unwrap();
        assert_eq!(pair.older, "0.10-stable");
        assert_eq!(pair.newer, "0.11-stable");
    }

    #[test]
    fn keeps_listing_order_for_non_numeric_names() {
        let pair = select_stable_pair(&branches(&["b-stable", "a-stable", "0.1-stable"])).unwrap();
        assert_eq!(pair.older, "a-stable");
        assert_eq!(pair.newer, "0.1-stable");
    }

    #[test]
    fn insufficient_branches() {
        let err = select_stable_pair(&branches(&["master", "0.1-stable"])).unwrap_err();
        assert!(matches!(err, Error::InsufficientBranches { found: 1 }));

        let err = select_stable_pair(&[]).unwrap_err();
        assert!(matches!(err, Error::InsufficientBranches { found: 0 }));
    }

    #[test]
    fn stable_marker_anywhere_in_name() {
        let b = Branch::new("release-stable-old");
        assert!(b.is_stable());
        assert!(!Branch::new("stable").is_stable());
    }
}
