mod branch_response;
mod commit_response;
mod pull_request_response;
mod repository_response;

pub use branch_response::BranchResponse;
pub use commit_response::CommitResponse;
pub use pull_request_response::PullRequestResponse;
pub use repository_response::RepositoryResponse;
