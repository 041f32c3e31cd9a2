//! Release label validation command implementation.
use log::*;
use std::{env, path::PathBuf};

use crate::{
    cli,
    engine::ReleaseEngine,
    error::{MergetagError, Result},
    event,
};

/// Execute check command to validate release labels on a pull request.
/// No tags are read or written.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let remote = args.get_remote()?;
    let forge = remote.get_forge()?;
    let engine = ReleaseEngine::new(forge, args.initial_version()?);

    let pr_number = resolve_pr_number(args)?;
    let label = engine.check(pr_number).await?;

    info!("pull request #{pr_number} carries release label: {label}");

    Ok(())
}

/// Resolve the pull request number from CLI arguments or the trigger
/// event payload.
fn resolve_pr_number(args: &cli::Args) -> Result<u64> {
    if let Some(number) = args.pr_number {
        return Ok(number);
    }

    let path = env::var("GITHUB_EVENT_PATH").map_err(|_| {
        MergetagError::invalid_args(
            "must set --pr-number or run with a trigger event payload",
        )
    })?;

    let payload = event::load(&PathBuf::from(path))?;

    payload.pull_request.map(|pr| pr.number).ok_or_else(|| {
        MergetagError::invalid_args(
            "trigger event payload does not contain a pull request",
        )
    })
}
