pub mod extractor;
pub mod matcher;
pub mod merge_commit_set;
pub mod pull_requests;
pub mod template;
pub mod walker;

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote(String);

impl ReleaseNote {
    pub fn new(note: impl Into<String>) -> Self {
        ReleaseNote(note.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders the note as a markdown list entry, without the trailing newline
impl Display for ReleaseNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.as_str().trim_end_matches('\n'))
    }
}
