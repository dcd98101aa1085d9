use super::{
    commit::Commit,
    pull_request::PullRequest,
    query::{Page, PullRequestQuery, PullRequestState},
    repository::Repository,
    Error, RepositoryHost,
};
use crate::http;
use chrono::Utc;
use std::{cell::RefCell, collections::HashMap};

/// In-memory host recording every request made to it
#[derive(Default)]
pub struct FakeHost {
    repository_pages: Vec<Vec<Repository>>,
    branches: HashMap<String, String>,
    commits: HashMap<String, Commit>,
    pull_request_pages: Vec<Vec<PullRequest>>,
    failing_pull_request_page: Option<u32>,
    requested_repository_pages: RefCell<Vec<u32>>,
    requested_pull_request_queries: RefCell<Vec<PullRequestQuery>>,
    fetched_commits: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn with_repository_pages(mut self, pages: Vec<Vec<Repository>>) -> Self {
        self.repository_pages = pages;
        self
    }

    pub fn with_branch(mut self, branch: &str, head: &str) -> Self {
        self.branches.insert(branch.to_owned(), head.to_owned());
        self
    }

    pub fn with_commit(mut self, sha: &str, message: &str, parents: &[&str]) -> Self {
        let parents = parents.iter().map(|parent| parent.to_string()).collect();
        self.commits
            .insert(sha.to_owned(), Commit::new(sha, message, parents));
        self
    }

    /// Adds a chain of merge commits, each one the only parent of the previous
    pub fn with_merge_chain(self, shas: &[&str]) -> Self {
        shas.iter().enumerate().fold(self, |host, (index, sha)| {
            let parents: Vec<&str> = shas.get(index + 1).into_iter().copied().collect();
            host.with_commit(sha, &format!("Merge pull request #{}", index), &parents)
        })
    }

    pub fn with_pull_request_pages(mut self, pages: Vec<Vec<PullRequest>>) -> Self {
        self.pull_request_pages = pages;
        self
    }

    pub fn failing_on_pull_request_page(mut self, page: u32) -> Self {
        self.failing_pull_request_page = Some(page);
        self
    }

    pub fn requested_repository_pages(&self) -> Vec<u32> {
        self.requested_repository_pages.borrow().clone()
    }

    pub fn requested_pull_request_pages(&self) -> Vec<u32> {
        self.requested_pull_request_queries
            .borrow()
            .iter()
            .map(|query| query.page)
            .collect()
    }

    pub fn requested_pull_request_queries(&self) -> Vec<PullRequestQuery> {
        self.requested_pull_request_queries.borrow().clone()
    }

    pub fn fetched_commits(&self) -> Vec<String> {
        self.fetched_commits.borrow().clone()
    }

    fn page<T: Clone>(pages: &[Vec<T>], page: u32) -> Page<T> {
        let index = page.saturating_sub(1) as usize;
        let items = pages.get(index).cloned().unwrap_or_default();
        let next_page = if index + 1 < pages.len() { page + 1 } else { 0 };

        Page::new(items, next_page)
    }
}

pub fn not_found(what: &str) -> Error {
    Error::Http(http::Error::StatusError {
        url: what.to_owned(),
        status: 404,
        message: "Not Found".to_owned(),
    })
}

pub fn merged(number: u64, merge_commit: &str, body: &str) -> PullRequest {
    PullRequest {
        number,
        state: PullRequestState::Closed,
        title: format!("pull request {}", number),
        body: body.to_owned(),
        merged_at: Some(Utc::now()),
        merge_commit_sha: Some(merge_commit.to_owned()),
    }
}

pub fn unmerged(number: u64, merge_commit: &str) -> PullRequest {
    PullRequest {
        merged_at: None,
        ..merged(number, merge_commit, "")
    }
}

impl RepositoryHost for FakeHost {
    async fn list_repositories(&self, page: u32) -> Result<Page<Repository>, Error> {
        self.requested_repository_pages.borrow_mut().push(page);
        Ok(Self::page(&self.repository_pages, page))
    }

    async fn get_branch_head(
        &self,
        _owner: &str,
        _repo: &str,
        branch: &str,
    ) -> Result<Commit, Error> {
        let head = self.branches.get(branch).ok_or_else(|| not_found(branch))?;
        self.commits
            .get(head)
            .cloned()
            .ok_or_else(|| not_found(head))
    }

    async fn get_commit(&self, _owner: &str, _repo: &str, sha: &str) -> Result<Commit, Error> {
        self.fetched_commits.borrow_mut().push(sha.to_owned());
        self.commits.get(sha).cloned().ok_or_else(|| not_found(sha))
    }

    async fn list_pull_requests(
        &self,
        _owner: &str,
        _repo: &str,
        query: &PullRequestQuery,
    ) -> Result<Page<PullRequest>, Error> {
        self.requested_pull_request_queries
            .borrow_mut()
            .push(query.clone());

        if self.failing_pull_request_page == Some(query.page) {
            return Err(not_found("pulls"));
        }

        Ok(Self::page(&self.pull_request_pages, query.page))
    }
}
