use anyhow::{Context, Result};
use reqwest::{Client, Url};
use std::time::Duration;

use crate::data_models::{ApiErrorEnvelope, SearchListResponse, SearchResponse};
use crate::error::SearchError;

pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Run one search against the API and decode the result.
    pub async fn search(&self, url: Url) -> Result<SearchResponse, SearchError> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        decode_response(&body)
    }
}

/// Decode a search API body. An `error` envelope on a 2xx body is still a failure.
pub fn decode_response(body: &[u8]) -> Result<SearchResponse, SearchError> {
    let raw: SearchListResponse = serde_json::from_slice(body)?;
    if let Some(error) = raw.error {
        return Err(SearchError::Upstream {
            status: error.code,
            message: error.message,
        });
    }
    log::info!(
        "decoded {} items ({} total results)",
        raw.items.len(),
        raw.page_info.total_results
    );
    Ok(raw.into())
}
