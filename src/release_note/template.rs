/// The instructions authors see when opening a pull request.
///
/// Description lines starting with any of these are dropped from the fallback note.
pub const PR_TEMPLATE: &[&str] = &[
    "<!--  Thanks for sending a pull request!  Here are some tips for you:",
    "1. Follow the instructions for writing a release note from k8s: https://git.k8s.io/community/contributors/guide/release-notes.md",
    "-->",
    "**What this PR does / why we need it**:",
    "**Which issue(s) this PR fixes**",
    "Fixes #",
    "**Special notes for your reviewer**:",
    "**Release note**:",
    "<!--  Write your release note:",
    "1. Enter your extended release note in the below block. If the PR requires additional action from users switching to the new release, include the string \"action required\".",
    "2. If no release note is required, just write \"NONE\".",
    "Signed-off-by:",
];
