pub mod response;

use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::Deref;
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub struct Credentials<'a> {
    pub user: &'a str,
    pub token: &'a str,
}

pub trait Headers {
    fn default_headers(self, credentials: &Credentials) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, credentials: &Credentials) -> RequestBuilder {
        self.bearer_auth(credentials.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, credentials.user)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed")]
    RequestError {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("request to {url} returned {status}: {message}")]
    StatusError {
        url: String,
        status: u16,
        message: String,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
