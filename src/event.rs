//! Trigger event payload parsing.
//!
//! The hosting environment writes the event that triggered the run to a
//! JSON file. Only the pull request number is consumed here.
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct EventPullRequest {
    pub number: u64,
}

/// Event payload fields consumed from the trigger event file.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    pub pull_request: Option<EventPullRequest>,
}

/// Load and parse the trigger event payload file.
pub fn load(path: &Path) -> Result<EventPayload> {
    let content = fs::read_to_string(path)?;
    let payload = serde_json::from_str(&content)?;
    Ok(payload)
}
