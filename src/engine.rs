//! Release decision engine.
//!
//! Resolves the pull request behind a merged commit, applies the label
//! policy, and computes the next version tag. Deciding is read-only and
//! separated from publishing so the decision path can be exercised
//! without the write path.
use log::*;
use semver::Version;

use crate::{
    analyzer::{
        label::{ReleaseLabel, release_label},
        single,
        version::{bump, select_latest},
    },
    error::{MergetagError, Result},
    forge::traits::Forge,
};

/// Outcome of a merge-event decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// The pull request opted out of releasing.
    Skip { pr_number: u64 },
    /// Publish a tag for the computed version.
    Publish { pr_number: u64, version: Version },
}

/// Orchestrates pull request resolution, label validation, and version
/// computation against a forge.
pub struct ReleaseEngine {
    forge: Box<dyn Forge>,
    initial_version: Version,
}

impl ReleaseEngine {
    pub fn new(forge: Box<dyn Forge>, initial_version: Version) -> Self {
        Self {
            forge,
            initial_version,
        }
    }

    /// Validate the release label on a pull request without publishing
    /// anything. Used on pull-request events.
    pub async fn check(&self, pr_number: u64) -> Result<ReleaseLabel> {
        let pr = self.forge.get_pull_request(pr_number).await?;
        release_label(&pr)
    }

    /// Decide what to release for a merged commit. Read-only: queries the
    /// forge but never writes to it.
    pub async fn decide(&self, sha: &str) -> Result<ReleaseDecision> {
        let prs = self.forge.associated_pull_requests(sha).await?;

        let pr = single(
            prs,
            || MergetagError::NoAssociatedPullRequest {
                sha: sha.to_string(),
            },
            |count| MergetagError::AmbiguousAssociatedPullRequest {
                sha: sha.to_string(),
                count,
            },
        )?;

        let label = release_label(&pr)?;

        debug!("pull request #{} carries release label: {label}", pr.number);

        if label == ReleaseLabel::NoRelease {
            return Ok(ReleaseDecision::Skip {
                pr_number: pr.number,
            });
        }

        let tags = self.forge.list_tags().await?;
        let names = tags.into_iter().map(|tag| tag.name);

        let version = match select_latest(names) {
            Some(base) => {
                debug!("latest existing version: {base}");
                bump(&base, label)?
            }
            None => {
                info!(
                    "no existing version tags: using initial version {}",
                    self.initial_version
                );
                self.initial_version.clone()
            }
        };

        Ok(ReleaseDecision::Publish {
            pr_number: pr.number,
            version,
        })
    }

    /// Decide and, when a release is due, publish the tag against the
    /// merged commit. Returns the published tag name.
    pub async fn release(&self, sha: &str) -> Result<Option<String>> {
        match self.decide(sha).await? {
            ReleaseDecision::Skip { pr_number } => {
                info!(
                    "pull request #{pr_number} is labeled no-release: skipping tag publication"
                );
                Ok(None)
            }
            ReleaseDecision::Publish { pr_number, version } => {
                let tag = version.to_string();
                info!(
                    "tagging commit {sha} as {tag} (pull request #{pr_number})"
                );
                self.forge.create_tag(&tag, sha).await?;
                Ok(Some(tag))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{
        traits::MockForge,
        types::{PullRequest, TagRecord},
    };

    fn pr(number: u64, labels: &[&str]) -> PullRequest {
        PullRequest {
            number,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn tag(name: &str) -> TagRecord {
        TagRecord {
            name: name.to_string(),
            sha: "f00ba4".to_string(),
        }
    }

    #[test_log::test(tokio::test)]
    async fn bumps_major_version_from_latest_tag() {
        let mut forge = MockForge::new();
        forge
            .expect_associated_pull_requests()
            .withf(|sha| sha == "abc123")
            .returning(|_| Ok(vec![pr(7, &["major", "enhancement"])]));
        forge.expect_list_tags().returning(|| {
            Ok(vec![tag("1.4.2"), tag("1.3.0"), tag("nightly")])
        });

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let decision = engine.decide("abc123").await.unwrap();

        assert_eq!(
            decision,
            ReleaseDecision::Publish {
                pr_number: 7,
                version: Version::new(2, 0, 0),
            }
        );
    }

    #[test_log::test(tokio::test)]
    async fn uses_initial_version_verbatim_when_no_tags_exist() {
        let mut forge = MockForge::new();
        forge
            .expect_associated_pull_requests()
            .returning(|_| Ok(vec![pr(3, &["minor"])]));
        forge.expect_list_tags().returning(|| Ok(vec![]));

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let decision = engine.decide("abc123").await.unwrap();

        assert_eq!(
            decision,
            ReleaseDecision::Publish {
                pr_number: 3,
                version: Version::new(0, 1, 0),
            }
        );
    }

    #[test_log::test(tokio::test)]
    async fn skips_release_without_listing_tags() {
        let mut forge = MockForge::new();
        forge
            .expect_associated_pull_requests()
            .returning(|_| Ok(vec![pr(9, &["no-release", "docs"])]));
        forge.expect_list_tags().times(0);
        forge.expect_create_tag().times(0);

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let decision = engine.decide("abc123").await.unwrap();

        assert_eq!(decision, ReleaseDecision::Skip { pr_number: 9 });
    }

    #[test_log::test(tokio::test)]
    async fn fails_when_commit_has_no_associated_pull_request() {
        let mut forge = MockForge::new();
        forge
            .expect_associated_pull_requests()
            .returning(|_| Ok(vec![]));
        forge.expect_create_tag().times(0);

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let result = engine.release("abc123").await;

        assert!(matches!(
            result,
            Err(MergetagError::NoAssociatedPullRequest { sha }) if sha == "abc123"
        ));
    }

    #[test_log::test(tokio::test)]
    async fn fails_when_commit_has_multiple_associated_pull_requests() {
        let mut forge = MockForge::new();
        forge.expect_associated_pull_requests().returning(|_| {
            Ok(vec![pr(1, &["patch"]), pr(2, &["minor"])])
        });
        forge.expect_create_tag().times(0);

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let result = engine.release("abc123").await;

        assert!(matches!(
            result,
            Err(MergetagError::AmbiguousAssociatedPullRequest {
                count: 2,
                ..
            })
        ));
    }

    #[test_log::test(tokio::test)]
    async fn propagates_label_policy_errors() {
        let mut forge = MockForge::new();
        forge
            .expect_associated_pull_requests()
            .returning(|_| Ok(vec![pr(5, &["question"])]));
        forge.expect_list_tags().times(0);

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let result = engine.decide("abc123").await;

        assert!(matches!(
            result,
            Err(MergetagError::MissingReleaseLabel { pr_number: 5 })
        ));
    }

    #[test_log::test(tokio::test)]
    async fn publishes_tag_against_the_merged_commit() {
        let mut forge = MockForge::new();
        forge
            .expect_associated_pull_requests()
            .returning(|_| Ok(vec![pr(11, &["patch"])]));
        forge
            .expect_list_tags()
            .returning(|| Ok(vec![tag("1.4.2")]));
        forge
            .expect_create_tag()
            .withf(|tag_name, sha| tag_name == "1.4.3" && sha == "abc123")
            .times(1)
            .returning(|_, _| Ok(()));

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let published = engine.release("abc123").await.unwrap();

        assert_eq!(published, Some("1.4.3".to_string()));
    }

    #[test_log::test(tokio::test)]
    async fn surfaces_tag_conflicts_from_the_forge() {
        let mut forge = MockForge::new();
        forge
            .expect_associated_pull_requests()
            .returning(|_| Ok(vec![pr(11, &["patch"])]));
        forge
            .expect_list_tags()
            .returning(|| Ok(vec![tag("1.4.2")]));
        forge.expect_create_tag().returning(|tag_name, _| {
            Err(MergetagError::TagConflict {
                tag: tag_name.to_string(),
            })
        });

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let result = engine.release("abc123").await;

        assert!(matches!(
            result,
            Err(MergetagError::TagConflict { tag }) if tag == "1.4.3"
        ));
    }

    #[test_log::test(tokio::test)]
    async fn validates_labels_on_pull_request_events() {
        let mut forge = MockForge::new();
        forge
            .expect_get_pull_request()
            .withf(|number| *number == 42)
            .returning(|number| Ok(pr(number, &["minor", "ci"])));
        forge.expect_list_tags().times(0);
        forge.expect_create_tag().times(0);

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let label = engine.check(42).await.unwrap();

        assert_eq!(label, ReleaseLabel::Minor);
    }

    #[test_log::test(tokio::test)]
    async fn check_propagates_ambiguous_labels() {
        let mut forge = MockForge::new();
        forge
            .expect_get_pull_request()
            .returning(|number| Ok(pr(number, &["patch", "no-release"])));

        let engine =
            ReleaseEngine::new(Box::new(forge), Version::new(0, 1, 0));
        let result = engine.check(42).await;

        assert!(matches!(
            result,
            Err(MergetagError::AmbiguousReleaseLabel { pr_number: 42, .. })
        ));
    }
}
