use super::merge_commit_set::MergeCommitSet;
use crate::{
    config::Revision,
    github::{repository::Repository, Error, RepositoryHost},
};

/// Collects the merge commits of `branch` newer than `from` and up to `to`.
///
/// The walk starts at the branch head and, at every step, follows the first
/// parent that is itself a pull request merge. It ends on `from` (excluded) or
/// when no such parent exists, so a `from` outside the history yields every
/// merge commit that can be reached.
pub async fn walk<H>(
    host: &H,
    repository: &Repository,
    branch: &str,
    from: &str,
    to: &Revision,
) -> Result<MergeCommitSet, Error>
where
    H: RepositoryHost,
{
    let head = host
        .get_branch_head(&repository.owner, &repository.name, branch)
        .await?;

    let mut merge_commits = MergeCommitSet::new();
    let mut current = Some(head.sha);
    let mut parents = head.parents;
    let mut in_range = *to == Revision::Head;

    while let Some(sha) = current.take() {
        if let Revision::Sha(to) = to {
            if !in_range && sha == *to {
                in_range = true;
            }
        }

        if sha == from {
            log::debug!("found from commit: {}", sha);
            break;
        }

        if in_range {
            log::debug!("adding: {}", sha);
            merge_commits.insert(sha);
        } else {
            log::debug!("skipping: {}", sha);
        }

        for parent in std::mem::take(&mut parents) {
            let commit = host
                .get_commit(&repository.owner, &repository.name, &parent)
                .await?;

            if commit.is_pull_request_merge() {
                current = Some(commit.sha);
                parents = commit.parents;
                break;
            }
        }
    }

    Ok(merge_commits)
}
