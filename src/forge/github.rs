//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, models, params::repos::Reference};
use serde::Deserialize;

use crate::{
    error::{MergetagError, Result},
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        traits::Forge,
        types::{PullRequest, TagRecord},
    },
};

#[derive(Debug, Deserialize)]
struct LabelEntry {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct AssociatedPullEntry {
    pub number: u64,
    #[serde(default)]
    pub labels: Vec<LabelEntry>,
}

/// GitHub forge implementation using Octocrab for API interactions with
/// pull requests and tags.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl Forge for Github {
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        let pr = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .get(number)
            .await?;

        let labels = pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|l| l.name)
            .collect();

        Ok(PullRequest { number, labels })
    }

    async fn associated_pull_requests(
        &self,
        sha: &str,
    ) -> Result<Vec<PullRequest>> {
        let endpoint = format!(
            "{}/repos/{}/{}/commits/{}/pulls",
            self.base_uri, self.config.owner, self.config.repo, sha
        );

        debug!("listing pull requests associated with commit: {sha}");

        let entries: Vec<AssociatedPullEntry> =
            self.instance.get(endpoint, None::<&()>).await?;

        Ok(entries
            .into_iter()
            .map(|entry| PullRequest {
                number: entry.number,
                labels: entry.labels.into_iter().map(|l| l.name).collect(),
            })
            .collect())
    }

    async fn list_tags(&self) -> Result<Vec<TagRecord>> {
        let mut page = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .list_tags()
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await?;

        let mut records: Vec<TagRecord> = vec![];

        loop {
            for tag in page.take_items() {
                records.push(TagRecord {
                    name: tag.name,
                    sha: tag.commit.sha,
                });
            }

            match self
                .instance
                .get_page::<models::repos::Tag>(&page.next)
                .await?
            {
                Some(next) => page = next,
                None => break,
            }
        }

        debug!("found {} tags for repo: {}", records.len(), self.config.path);

        Ok(records)
    }

    async fn create_tag(&self, tag_name: &str, sha: &str) -> Result<()> {
        let result = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .create_ref(&Reference::Tag(tag_name.to_string()), sha)
            .await;

        match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.message.contains("already exists") =>
            {
                Err(MergetagError::TagConflict {
                    tag: tag_name.to_string(),
                })
            }
            Err(err) => Err(err.into()),
            Ok(_) => {
                info!("created tag {tag_name} at commit {sha}");
                Ok(())
            }
        }
    }
}
