pub mod commit;
#[cfg(test)]
pub mod fake;
pub mod github_client;
mod macros;
pub mod pull_request;
pub mod query;
pub mod repository;
mod response;

use self::{
    commit::Commit,
    pull_request::PullRequest,
    query::{Page, PullRequestQuery},
    repository::Repository,
};
use crate::{config::RepositoryRef, http};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] http::Error),
    #[error("repository {0} is not accessible with the given token")]
    RepositoryNotFound(String),
}

/// What the release notes pipeline needs from the hosting service.
///
/// Every call blocks the pipeline until it returns; any error is final.
pub trait RepositoryHost {
    /// One page of the repositories the caller can access
    async fn list_repositories(&self, page: u32) -> Result<Page<Repository>, Error>;

    async fn get_branch_head(&self, owner: &str, repo: &str, branch: &str)
        -> Result<Commit, Error>;

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, Error>;

    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        query: &PullRequestQuery,
    ) -> Result<Page<PullRequest>, Error>;
}

/// Finds `repository` among the repositories accessible to the caller
pub async fn resolve_repository<H>(host: &H, repository: &RepositoryRef) -> Result<Repository, Error>
where
    H: RepositoryHost,
{
    let mut page = 1;

    while page != 0 {
        let repositories = host.list_repositories(page).await?;

        if let Some(found) = repositories
            .items
            .into_iter()
            .find(|candidate| candidate.matches(repository))
        {
            log::debug!("repo: {}", found.name);
            return Ok(found);
        }

        page = repositories.next_page;
    }

    Err(Error::RepositoryNotFound(repository.to_string()))
}
