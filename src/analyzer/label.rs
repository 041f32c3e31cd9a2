//! Release-intent label policy.
//!
//! A pull request signals how the next version should change through
//! exactly one label drawn from the vocabulary below. Any other label on
//! the pull request is ignored.
use std::fmt::Display;

use crate::{
    analyzer::single,
    error::{MergetagError, Result},
    forge::types::PullRequest,
};

/// Label requesting a patch version bump.
pub const PATCH_LABEL: &str = "patch";
/// Label requesting a minor version bump.
pub const MINOR_LABEL: &str = "minor";
/// Label requesting a major version bump.
pub const MAJOR_LABEL: &str = "major";
/// Label requesting that no tag be published for the merge.
pub const NO_RELEASE_LABEL: &str = "no-release";

/// Release intent attached to a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseLabel {
    Patch,
    Minor,
    Major,
    NoRelease,
}

impl ReleaseLabel {
    /// Look up a label name in the release vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            PATCH_LABEL => Some(Self::Patch),
            MINOR_LABEL => Some(Self::Minor),
            MAJOR_LABEL => Some(Self::Major),
            NO_RELEASE_LABEL => Some(Self::NoRelease),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => PATCH_LABEL,
            Self::Minor => MINOR_LABEL,
            Self::Major => MAJOR_LABEL,
            Self::NoRelease => NO_RELEASE_LABEL,
        }
    }
}

impl Display for ReleaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the single release-intent label from a pull request.
///
/// Fails when no label on the pull request is in the vocabulary, or when
/// more than one is. Order of the label set does not matter.
pub fn release_label(pr: &PullRequest) -> Result<ReleaseLabel> {
    let matched: Vec<ReleaseLabel> = pr
        .labels
        .iter()
        .filter_map(|name| ReleaseLabel::from_name(name))
        .collect();

    let names: Vec<String> =
        matched.iter().map(|label| label.to_string()).collect();

    single(
        matched,
        || MergetagError::MissingReleaseLabel {
            pr_number: pr.number,
        },
        |_| MergetagError::AmbiguousReleaseLabel {
            pr_number: pr.number,
            labels: names,
        },
    )
}
