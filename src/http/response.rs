use super::Error;
use reqwest::header::LINK;
use serde::de::DeserializeOwned;
use url::Url;

/// A decoded response body plus the pagination cursor GitHub attaches to it
#[derive(Debug)]
pub struct JsonResponse<T> {
    pub payload: T,
    /// 0 when there is no further page
    pub next_page: u32,
}

pub trait ResponseHandler {
    async fn handle<T>(self) -> Result<JsonResponse<T>, Error>
    where
        T: DeserializeOwned;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle<T>(self) -> Result<JsonResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.map_err(|cause| Error::RequestError {
            url: cause.url().map(Url::to_string).unwrap_or_default(),
            cause,
        })?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(next_page_from_link)
            .unwrap_or_default();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::StatusError {
                url,
                status,
                message: text,
            });
        }

        let payload =
            serde_json::from_str::<T>(&text).map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(JsonResponse {
            payload,
            next_page,
        })
    }
}

/// Extracts the `page` parameter of the `rel="next"` entry of a `Link` header
pub fn next_page_from_link(link: &str) -> u32 {
    link.split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let target = parts.next()?.trim();
            let is_next = parts.any(|param| param.trim() == r#"rel="next""#);
            if !is_next {
                return None;
            }

            let target = target.strip_prefix('<')?.strip_suffix('>')?;
            let url = Url::parse(target).ok()?;
            let page = url
                .query_pairs()
                .find(|(key, _)| key == "page")
                .and_then(|(_, value)| value.parse::<u32>().ok());
            page
        })
        .next()
        .unwrap_or_default()
}
