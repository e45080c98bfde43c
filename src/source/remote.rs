use super::{FetchError, PageSource};
use crate::config::FetchOptions;
use reqwest::Client;

/// Fetches pages over HTTP(S) with a shared connection pool.
pub(crate) struct RemoteSource {
    client: Client,
}

impl RemoteSource {
    pub(crate) fn new(options: &FetchOptions) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for RemoteSource {
    async fn fetch_raw(&self, url: &str) -> Result<String, FetchError> {
        // Non-2xx responses still carry a page worth parsing.
        let response = self.client.get(url).send().await?;

        // Decoding follows the Content-Type charset. A body cut off before
        // its end cannot be parsed; a timeout stays a network failure.
        response.text().await.map_err(|error| {
            if error.is_timeout() {
                FetchError::Network(error)
            } else {
                FetchError::Parse(error.into())
            }
        })
    }
}
