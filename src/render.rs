use minijinja::{Environment, Value, context};
use std::collections::HashMap;

use crate::data_models::{ItemKind, RenderedItem, SearchItem, SearchResponse};

pub const YOUTUBE_HOME: &str = "https://www.youtube.com";
pub const NO_RESULTS_BODY: &str = "0 results found!";

const THUMBNAIL_WIDTH: u32 = 120;
const THUMBNAIL_HEIGHT: u32 = 100;

const ITEM_TEMPLATE: &str = "item.html";
const PAGE_TEMPLATE: &str = "results.html";

impl ItemKind {
    /// Page on youtube.com the item should link to.
    pub fn link(&self, id: &HashMap<String, String>) -> String {
        let lookup = |key: &str| id.get(key).map(String::as_str).unwrap_or_default();
        match self {
            ItemKind::Video => format!("{YOUTUBE_HOME}/watch?v={}", lookup("videoId")),
            ItemKind::Channel => format!("{YOUTUBE_HOME}/channel/{}", lookup("channelId")),
            ItemKind::Other => YOUTUBE_HOME.to_string(),
        }
    }
}

/// Renders result markup from the templates compiled into the binary.
/// Templates end in `.html`, so every interpolated value is HTML-escaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(ITEM_TEMPLATE, include_str!("../templates/item.html"))?;
        env.add_template(PAGE_TEMPLATE, include_str!("../templates/results.html"))?;
        Ok(Self { env })
    }

    pub fn render_item(&self, item: &SearchItem) -> Result<RenderedItem, minijinja::Error> {
        let link = item.kind.link(&item.id);
        let tmpl = self.env.get_template(ITEM_TEMPLATE)?;
        let mut state = tmpl.eval_to_state(context! {
            link => &link,
            title => &item.title,
            description => &item.description,
            thumbnail_url => &item.thumbnail_url,
            width => THUMBNAIL_WIDTH,
            height => THUMBNAIL_HEIGHT,
            byline => byline(item),
        })?;

        Ok(RenderedItem {
            title_html: state.render_block("title")?,
            description_html: state.render_block("description")?,
            image_html: state.render_block("image")?,
            byline_html: state.render_block("byline")?,
            link,
        })
    }

    /// Render the full results document. Zero-result responses are answered
    /// before this point with [`NO_RESULTS_BODY`].
    pub fn render_page(&self, response: &SearchResponse) -> Result<String, minijinja::Error> {
        let items = response
            .items
            .iter()
            .map(|item| self.render_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        let tmpl = self.env.get_template(PAGE_TEMPLATE)?;
        tmpl.render(context! {
            total_results => response.total_results,
            results_per_page => response.results_per_page,
            items => Value::from_serialize(&items),
        })
    }
}

fn byline(item: &SearchItem) -> String {
    let date = item
        .published_at
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    match (item.channel_title.is_empty(), date.is_empty()) {
        (true, _) => date,
        (false, true) => item.channel_title.clone(),
        (false, false) => format!("{} · {date}", item.channel_title),
    }
}
