#[derive(Debug, Clone, PartialEq, Eq)]
/// Pull request snapshot fetched once per decision.
pub struct PullRequest {
    pub number: u64,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Repository tag and the commit it points at.
pub struct TagRecord {
    pub name: String,
    pub sha: String,
}
