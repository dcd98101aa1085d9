/// Sends an authenticated GET to the client's api and decodes the json answer
#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr $(, $query:expr)?) => {{
        use $crate::http::{response::ResponseHandler, Headers};

        $client
            .http
            .get($url)
            .default_headers(&$client.credentials())
            $(.query($query))?
            .send()
            .await
            .handle()
            .await
    }};
}
