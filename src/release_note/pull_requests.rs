use crate::github::{
    pull_request::PullRequest, query::PullRequestQuery, repository::Repository, Error,
    RepositoryHost,
};

/// Pages of pull requests, most recently updated first, fetched one at a time
pub struct PullRequestPages<'a, H> {
    host: &'a H,
    repository: &'a Repository,
    per_page: u32,
    next_page: u32,
}

impl<'a, H> PullRequestPages<'a, H>
where
    H: RepositoryHost,
{
    pub fn new(host: &'a H, repository: &'a Repository, per_page: u32) -> Self {
        PullRequestPages {
            host,
            repository,
            per_page,
            next_page: 1,
        }
    }

    /// `None` once the host reported the last page
    pub async fn next(&mut self) -> Result<Option<Vec<PullRequest>>, Error> {
        if self.next_page == 0 {
            return Ok(None);
        }

        let query = PullRequestQuery::recently_updated(self.next_page, self.per_page);
        log::debug!("fetching pull requests page {}", query.page);

        let page = self
            .host
            .list_pull_requests(&self.repository.owner, &self.repository.name, &query)
            .await?;
        self.next_page = page.next_page;

        Ok(Some(page.items))
    }
}
