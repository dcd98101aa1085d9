use super::CommitResponse;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BranchResponse {
    pub name: String,
    pub commit: CommitResponse,
}
