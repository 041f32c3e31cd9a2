//! Unified interface for Git forge platforms.
//!
//! Provides token-based authentication, pull request lookups, and tag
//! operations through a common trait.

/// Configuration and authentication for forge platforms.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Common traits for forge platform abstraction.
pub mod traits;

/// Shared data types for pull requests and tags.
pub mod types;
