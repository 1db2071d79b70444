use serde::Deserialize;

use crate::query::SearchRequest;

/// Positional segments of `/search/:query[/:type[/:max]]`.
#[derive(Debug, Deserialize)]
pub struct SearchPath {
    pub query: String,
    #[serde(rename = "type", default)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}

impl From<SearchPath> for SearchRequest {
    fn from(path: SearchPath) -> Self {
        SearchRequest::from_params(
            &path.query,
            path.result_type.as_deref(),
            path.max.as_deref(),
        )
    }
}
