use super::{query::PullRequestState, response::PullRequestResponse};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub state: PullRequestState,
    pub title: String,
    pub body: String,
    pub merged_at: Option<DateTime<Utc>>,
    pub merge_commit_sha: Option<String>,
}

impl PullRequest {
    /// The merge commit, if the pull request was merged
    pub fn merge_commit(&self) -> Option<&str> {
        self.merged_at.and(self.merge_commit_sha.as_deref())
    }
}

impl From<PullRequestResponse> for PullRequest {
    fn from(response: PullRequestResponse) -> Self {
        PullRequest {
            number: response.number,
            state: response.state,
            title: response.title,
            body: response.body.unwrap_or_default(),
            merged_at: response.merged_at,
            merge_commit_sha: response.merge_commit_sha,
        }
    }
}
