use super::response::RepositoryResponse;
use crate::config::RepositoryRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    #[cfg(test)]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn matches(&self, reference: &RepositoryRef) -> bool {
        self.owner == reference.owner && self.name == reference.name
    }
}

impl From<RepositoryResponse> for Repository {
    fn from(response: RepositoryResponse) -> Self {
        Repository {
            owner: response.owner.login,
            name: response.name,
        }
    }
}
