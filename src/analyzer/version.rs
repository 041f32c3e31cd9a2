//! Tag selection and version increment rules.
use semver::Version;

use crate::{
    analyzer::label::ReleaseLabel,
    error::{MergetagError, Result},
};

/// Select the highest semantic version among a list of tag names.
///
/// Names that do not parse as semantic versions are dropped. Returns
/// `None` when nothing parses, which is the normal state for a
/// repository with no prior releases.
pub fn select_latest<I, S>(names: I) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| Version::parse(name.as_ref()).ok())
        .max()
}

/// Compute the next version from a base version and a release label.
///
/// Standard semantic-version rules: patch increments the rightmost
/// component, minor increments the middle and zeroes patch, major
/// increments the leftmost and zeroes the rest. Pre-release and build
/// metadata on the base never carry over.
pub fn bump(base: &Version, label: ReleaseLabel) -> Result<Version> {
    let next = match label {
        ReleaseLabel::Patch => {
            Version::new(base.major, base.minor, base.patch + 1)
        }
        ReleaseLabel::Minor => Version::new(base.major, base.minor + 1, 0),
        ReleaseLabel::Major => Version::new(base.major + 1, 0, 0),
        ReleaseLabel::NoRelease => {
            return Err(MergetagError::IncrementFailure(format!(
                "label '{label}' does not map to a version increment"
            )));
        }
    };

    Ok(next)
}
