use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RepositoryResponse {
    pub name: String,
    pub owner: OwnerResponse,
}

#[derive(Debug, Deserialize)]
pub struct OwnerResponse {
    pub login: String,
}
