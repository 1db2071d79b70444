//! Normalizing path parameters into a [`SearchRequest`] and turning that into
//! the outbound search API URL.

use anyhow::{Context, Result};
use reqwest::Url;
use std::fmt;
use std::num::IntErrorKind;

pub const DEFAULT_MAX_RESULTS: u8 = 10;
pub const MAX_RESULTS_LIMIT: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultType {
    #[default]
    Video,
    Channel,
    User,
}

impl ResultType {
    /// Unknown or missing types fall back to [`ResultType::Video`].
    pub fn parse_or_default(raw: Option<&str>) -> ResultType {
        match raw {
            Some("video") => ResultType::Video,
            Some("channel") => ResultType::Channel,
            Some("user") => ResultType::User,
            _ => ResultType::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Video => "video",
            ResultType::Channel => "channel",
            ResultType::User => "user",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page size sent upstream, always within `1..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxResults(u8);

impl MaxResults {
    /// Non-numeric or non-positive input becomes the default of 10, anything
    /// above the API limit is clamped to 50. Surrounding whitespace makes the
    /// value non-numeric.
    pub fn parse_or_default(raw: Option<&str>) -> MaxResults {
        let Some(raw) = raw else {
            return MaxResults::default();
        };
        match raw.parse::<i64>() {
            Ok(n) if n > MAX_RESULTS_LIMIT as i64 => MaxResults(MAX_RESULTS_LIMIT),
            Ok(n) if n >= 1 => MaxResults(n as u8),
            Ok(_) => MaxResults::default(),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => MaxResults(MAX_RESULTS_LIMIT),
            Err(e) => {
                log::info!("ignoring max results {raw:?}: {e}");
                MaxResults::default()
            }
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for MaxResults {
    fn default() -> Self {
        MaxResults(DEFAULT_MAX_RESULTS)
    }
}

impl fmt::Display for MaxResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub result_type: ResultType,
    pub max_results: MaxResults,
}

impl SearchRequest {
    pub fn from_params(query: &str, result_type: Option<&str>, max_results: Option<&str>) -> Self {
        SearchRequest {
            query: query.to_string(),
            result_type: ResultType::parse_or_default(result_type),
            max_results: MaxResults::parse_or_default(max_results),
        }
    }
}

/// Builds search API URLs. The API key is fixed when the builder is created.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: Url,
    api_key: String,
}

impl QueryBuilder {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid search API url: {base_url}"))?;
        Ok(QueryBuilder {
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn build(&self, request: &SearchRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("part", "snippet")
            .append_pair("order", "relevance")
            .append_pair("key", &self.api_key)
            .append_pair("q", &request.query)
            .append_pair("type", request.result_type.as_str())
            .append_pair("maxResults", &request.max_results.to_string());
        url
    }
}
