use indexmap::IndexSet;

/// Merge commits still waiting for their pull request, in branch history order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeCommitSet(IndexSet<String>);

impl MergeCommitSet {
    pub fn new() -> Self {
        MergeCommitSet::default()
    }

    /// Returns false when `sha` was already collected
    pub fn insert(&mut self, sha: impl Into<String>) -> bool {
        self.0.insert(sha.into())
    }

    /// Returns whether `sha` was pending
    pub fn remove(&mut self, sha: &str) -> bool {
        self.0.shift_remove(sha)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for MergeCommitSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MergeCommitSet(iter.into_iter().map(Into::into).collect())
    }
}
