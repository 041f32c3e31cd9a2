//! Tag computation and publication command implementation.
use log::*;
use std::{env, path::PathBuf};

use crate::{
    cli,
    engine::ReleaseEngine,
    error::{MergetagError, Result},
    output,
};

/// Execute release command to compute the next version for a merged
/// commit and publish its tag.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let remote = args.get_remote()?;
    let forge = remote.get_forge()?;
    let engine = ReleaseEngine::new(forge, args.initial_version()?);

    let sha = resolve_sha(args)?;

    match engine.release(&sha).await? {
        Some(tag) => {
            let output_file =
                env::var("GITHUB_OUTPUT").ok().map(PathBuf::from);
            output::emit_tag(output_file.as_deref(), &tag)?;
        }
        None => {
            info!("nothing published for commit {sha}");
        }
    }

    Ok(())
}

/// Resolve the merged commit from CLI arguments or the environment.
fn resolve_sha(args: &cli::Args) -> Result<String> {
    if let Some(sha) = args.sha.clone() {
        return Ok(sha);
    }

    env::var("GITHUB_SHA").map_err(|_| {
        MergetagError::invalid_args("must set --sha or the GITHUB_SHA env var")
    })
}
