use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommitResponse {
    pub sha: String,
    pub commit: CommitDetails,
    #[serde(default)]
    pub parents: Vec<ParentResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetails {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ParentResponse {
    pub sha: String,
}
