use super::{
    extractor::ReleaseNoteExtractor, merge_commit_set::MergeCommitSet,
    pull_requests::PullRequestPages, ReleaseNote,
};
use crate::github::{pull_request::PullRequest, repository::Repository, Error, RepositoryHost};
use std::collections::VecDeque;

/// Pairs the collected merge commits with the pull requests that created them.
///
/// Notes come out in pull request scan order. No page is requested once every
/// merge commit has been matched.
pub struct Matcher<'a, H> {
    pages: PullRequestPages<'a, H>,
    pending: VecDeque<PullRequest>,
    targets: MergeCommitSet,
    extractor: &'a ReleaseNoteExtractor,
}

impl<'a, H> Matcher<'a, H>
where
    H: RepositoryHost,
{
    pub fn new(
        host: &'a H,
        repository: &'a Repository,
        targets: MergeCommitSet,
        extractor: &'a ReleaseNoteExtractor,
        per_page: u32,
    ) -> Self {
        Matcher {
            pages: PullRequestPages::new(host, repository, per_page),
            pending: VecDeque::new(),
            targets,
            extractor,
        }
    }

    pub async fn next_note(&mut self) -> Result<Option<ReleaseNote>, Error> {
        while !self.targets.is_empty() {
            let Some(pull_request) = self.pending.pop_front() else {
                match self.pages.next().await? {
                    Some(items) => self.pending.extend(items),
                    None => return Ok(None),
                }
                continue;
            };

            log::debug!(
                "pr nr {}, state {:?}: {}",
                pull_request.number,
                pull_request.state,
                pull_request.title
            );

            let Some(merge_commit) = pull_request.merge_commit() else {
                continue;
            };

            log::debug!("  is merged");
            if self.targets.remove(merge_commit) {
                log::debug!("    in range");
                return Ok(Some(self.extractor.extract(&pull_request.body)));
            }
        }

        Ok(None)
    }

    /// Merge commits not matched so far
    pub fn remaining(&self) -> &MergeCommitSet {
        &self.targets
    }
}
