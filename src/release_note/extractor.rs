use super::{template::PR_TEMPLATE, ReleaseNote};

const RELEASE_NOTE_FENCE: &str = "```release-note";
const CODE_FENCE: &str = "```";
const NO_RELEASE_NOTE: &str = "NONE";
const FALLBACK_PREFIX: &str = "no relNote, desc: ";

/// Recovers the release note from a templated pull request description
#[derive(Debug, Clone)]
pub struct ReleaseNoteExtractor {
    boilerplate: Vec<String>,
}

impl ReleaseNoteExtractor {
    pub fn new(boilerplate: Vec<String>) -> Self {
        ReleaseNoteExtractor {
            boilerplate: boilerplate
                .into_iter()
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }

    /// Returns the content of the `release-note` block, or the description
    /// stripped of boilerplate when the block is missing or says `NONE`.
    ///
    /// A plain fence never closes the block: once opened, every later line counts
    /// as part of the note.
    pub fn extract(&self, body: &str) -> ReleaseNote {
        let mut in_release_note = false;
        let mut release_note = String::new();
        let mut short_description = String::new();

        for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if line.starts_with(RELEASE_NOTE_FENCE) {
                in_release_note = true;
            } else if line.starts_with(CODE_FENCE) {
                continue;
            } else if in_release_note {
                if !line.contains(NO_RELEASE_NOTE) {
                    release_note.push_str(line);
                    release_note.push('\n');
                }
            } else if !self.is_boilerplate(line) {
                short_description.push_str(line);
                short_description.push('\n');
            }
        }

        if release_note.is_empty() {
            ReleaseNote::new(format!("{}{}", FALLBACK_PREFIX, short_description))
        } else {
            ReleaseNote::new(release_note)
        }
    }

    fn is_boilerplate(&self, line: &str) -> bool {
        self.boilerplate
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}

impl Default for ReleaseNoteExtractor {
    fn default() -> Self {
        ReleaseNoteExtractor::new(PR_TEMPLATE.iter().map(|line| line.to_string()).collect())
    }
}
