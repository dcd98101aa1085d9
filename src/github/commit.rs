use super::response::CommitResponse;

const MERGE_PULL_REQUEST_PREFIX: &str = "Merge pull request";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub parents: Vec<String>,
}

impl Commit {
    #[cfg(test)]
    pub fn new(sha: impl Into<String>, message: impl Into<String>, parents: Vec<String>) -> Self {
        Commit {
            sha: sha.into(),
            message: message.into(),
            parents,
        }
    }

    /// Whether this commit is the one GitHub creates when merging a pull request
    pub fn is_pull_request_merge(&self) -> bool {
        self.message.starts_with(MERGE_PULL_REQUEST_PREFIX)
    }
}

impl From<CommitResponse> for Commit {
    fn from(response: CommitResponse) -> Self {
        Commit {
            sha: response.sha,
            message: response.commit.message,
            parents: response
                .parents
                .into_iter()
                .map(|parent| parent.sha)
                .collect(),
        }
    }
}
