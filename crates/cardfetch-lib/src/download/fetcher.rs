use crate::config::HttpSettings;
use crate::error::{CardFetchError, EntryError};
use bytes::Bytes;
use std::future::Future;

/// Retrieves the full body behind a URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Bytes, EntryError>> + Send;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// A `timeout_secs` of zero leaves requests unbounded.
    pub fn new(settings: &HttpSettings) -> Result<Self, CardFetchError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if settings.timeout_secs > 0 {
            builder = builder.timeout(settings.timeout());
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, EntryError> {
        tracing::trace!(url, "Sending request");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EntryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::trace!(url, bytes = body.len(), "Received body");
        Ok(body)
    }
}
