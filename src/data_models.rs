use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const KIND_PREFIX: &str = "youtube#";

// =============================================================================
// Wire types, as returned by the search API
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchListResponse {
    pub kind: String,
    pub etag: String,
    pub next_page_token: Option<String>,
    pub page_info: PageInfo,
    pub region_code: Option<String>,
    pub items: Vec<Item>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub total_results: u64,
    pub results_per_page: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: HashMap<String, String>,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub published_at: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: HashMap<String, Thumbnail>,
    pub channel_title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

/// Body of a failed API call, `{"error": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}

// =============================================================================
// Decoded results
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Video,
    Channel,
    Other,
}

impl ItemKind {
    /// Parses tags like `youtube#video`. Anything unrecognised is `Other`.
    pub fn from_tag(tag: &str) -> ItemKind {
        match tag.strip_prefix(KIND_PREFIX) {
            Some("video") => ItemKind::Video,
            Some("channel") => ItemKind::Channel,
            _ => ItemKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchItem {
    pub kind: ItemKind,
    pub id: HashMap<String, String>,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Item> for SearchItem {
    fn from(item: Item) -> Self {
        let kind = item
            .id
            .get("kind")
            .map(|tag| ItemKind::from_tag(tag))
            .unwrap_or(ItemKind::Other);
        let thumbnail_url = item
            .snippet
            .thumbnails
            .get("default")
            .map(|t| t.url.clone())
            .unwrap_or_default();
        let published_at = DateTime::parse_from_rfc3339(&item.snippet.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));

        SearchItem {
            kind,
            id: item.id,
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail_url,
            channel_title: item.snippet.channel_title,
            published_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub total_results: u64,
    pub results_per_page: u64,
    pub next_page_token: Option<String>,
    pub region_code: Option<String>,
    pub items: Vec<SearchItem>,
}

impl From<SearchListResponse> for SearchResponse {
    fn from(raw: SearchListResponse) -> Self {
        SearchResponse {
            total_results: raw.page_info.total_results,
            results_per_page: raw.page_info.results_per_page,
            next_page_token: raw.next_page_token,
            region_code: raw.region_code,
            items: raw.items.into_iter().map(SearchItem::from).collect(),
        }
    }
}

/// HTML fragments for one search item, ready to be placed on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
    pub link: String,
    pub title_html: String,
    pub description_html: String,
    pub image_html: String,
    pub byline_html: String,
}
