//! CLI argument parsing and forge platform configuration.
use clap::{Parser, Subcommand};
use git_url_parse::GitUrl;
use secrecy::SecretString;
use semver::Version;
use std::env;

use crate::{
    error::{MergetagError, Result},
    forge::config::{Remote, RemoteConfig},
};

/// Version published when the repository has no prior semver tags.
pub const DEFAULT_INITIAL_TAG: &str = "0.1.0";

/// Global CLI arguments for forge configuration and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// GitHub repository URL (https://github.com/owner/repo).
    pub github_repo: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value = DEFAULT_INITIAL_TAG, global = true)]
    /// Version to publish when the repository has no semver tags yet.
    /// Used verbatim, never incremented.
    pub initial_tag: String,

    #[arg(long, global = true)]
    /// Pull request number to validate. Falls back to the trigger event
    /// payload.
    pub pr_number: Option<u64>,

    #[arg(long, global = true)]
    /// Merged commit to tag. Falls back to the GITHUB_SHA env var.
    pub sha: Option<String>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release operation subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate release labels on a pull request.
    Check,

    /// Compute and publish the next version tag for a merged commit.
    Release,
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<Remote> {
        if self.github_repo.is_empty() {
            return Err(MergetagError::invalid_args(
                "must configure a github repo",
            ));
        }

        get_github_remote(&self.github_repo, &self.github_token)
    }

    /// Parse and validate the configured initial tag.
    pub fn initial_version(&self) -> Result<Version> {
        let version = Version::parse(&self.initial_tag)?;
        Ok(version)
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(MergetagError::invalid_args(
            "only http and https schemes are supported for repo urls",
        )),
    }
}

/// Configure GitHub remote with URL parsing and token resolution.
fn get_github_remote(github_repo: &str, github_token: &str) -> Result<Remote> {
    let parsed = GitUrl::parse(github_repo)?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
    {
        token = env_var_token;
    }

    if token.is_empty() {
        return Err(MergetagError::invalid_args("must set github token"));
    }

    let host = parsed.host.ok_or(MergetagError::invalid_args(
        "unable to parse host from github repo",
    ))?;

    let owner = parsed.owner.ok_or(MergetagError::invalid_args(
        "unable to parse owner from github repo",
    ))?;

    let project_path = parsed
        .path
        .strip_prefix("/")
        .ok_or(MergetagError::invalid_args("failed to process project path"))?
        .to_string();

    let remote_config = RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        path: project_path,
        token: SecretString::from(token),
    };

    Ok(Remote::Github(remote_config))
}
