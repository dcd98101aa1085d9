use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
    /// Only meaningful as a filter
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestQuery {
    pub state: PullRequestState,
    pub sort: Sort,
    pub direction: Direction,
    pub page: u32,
    pub per_page: u32,
}

impl PullRequestQuery {
    /// Every pull request, most recently updated first
    pub fn recently_updated(page: u32, per_page: u32) -> Self {
        PullRequestQuery {
            state: PullRequestState::All,
            sort: Sort::Updated,
            direction: Direction::Desc,
            page,
            per_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0 when this is the last page
    pub next_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page: u32) -> Self {
        Page { items, next_page }
    }
}
