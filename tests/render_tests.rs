use scraper::{Html, Selector};
use std::collections::HashMap;

use tubesearch::data_models::{ItemKind, SearchItem, SearchResponse};
use tubesearch::render::*;

mod test_helpers {
    use super::*;

    pub fn renderer() -> PageRenderer {
        PageRenderer::new().unwrap()
    }

    pub fn item(kind: ItemKind, id: &[(&str, &str)], title: &str, description: &str) -> SearchItem {
        SearchItem {
            kind,
            id: id
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            title: title.to_string(),
            description: description.to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/x/default.jpg".to_string(),
            channel_title: String::new(),
            published_at: None,
        }
    }

    pub fn response(total: u64, items: Vec<SearchItem>) -> SearchResponse {
        SearchResponse {
            total_results: total,
            results_per_page: items.len() as u64,
            next_page_token: None,
            region_code: None,
            items,
        }
    }

    /// Value of `attr` on the first element matching `selector` in an HTML fragment.
    pub fn attr(fragment: &str, selector: &str, attr: &str) -> Option<String> {
        let html = Html::parse_fragment(fragment);
        let sel = Selector::parse(selector).unwrap();
        html.select(&sel)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }

    pub fn text(fragment: &str, selector: &str) -> String {
        let html = Html::parse_fragment(fragment);
        let sel = Selector::parse(selector).unwrap();
        html.select(&sel).next().unwrap().text().collect()
    }
}

use test_helpers::*;

#[cfg(test)]
mod link_tests {
    use super::*;

    #[test]
    fn test_video_links_to_watch_page() {
        let id = HashMap::from([("videoId".to_string(), "abc123".to_string())]);
        assert_eq!(
            ItemKind::Video.link(&id),
            "https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn test_channel_links_to_channel_page() {
        let id = HashMap::from([("channelId".to_string(), "xyz".to_string())]);
        assert_eq!(
            ItemKind::Channel.link(&id),
            "https://www.youtube.com/channel/xyz"
        );
    }

    #[test]
    fn test_other_kind_links_home() {
        let id = HashMap::from([("playlistId".to_string(), "PL1".to_string())]);
        assert_eq!(ItemKind::Other.link(&id), YOUTUBE_HOME);
    }
}

#[cfg(test)]
mod item_tests {
    use super::*;

    #[test]
    fn test_video_item_markup_links_to_watch_page() {
        let rendered = renderer()
            .render_item(&item(
                ItemKind::Video,
                &[("kind", "youtube#video"), ("videoId", "abc123")],
                "t",
                "d",
            ))
            .unwrap();
        assert_eq!(rendered.link, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(
            attr(&rendered.title_html, "a", "href").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
        assert_eq!(
            attr(&rendered.image_html, "a", "href").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
    }

    #[test]
    fn test_channel_item_markup_links_to_channel_page() {
        let rendered = renderer()
            .render_item(&item(
                ItemKind::Channel,
                &[("kind", "youtube#channel"), ("channelId", "xyz")],
                "t",
                "d",
            ))
            .unwrap();
        assert_eq!(rendered.link, "https://www.youtube.com/channel/xyz");
        assert_eq!(
            attr(&rendered.title_html, "a", "href").as_deref(),
            Some("https://www.youtube.com/channel/xyz")
        );
    }

    #[test]
    fn test_thumbnail_fixed_size() {
        let rendered = renderer()
            .render_item(&item(ItemKind::Video, &[("videoId", "a")], "t", "d"))
            .unwrap();
        assert_eq!(
            attr(&rendered.image_html, "img", "src").as_deref(),
            Some("https://i.ytimg.com/vi/x/default.jpg")
        );
        let style = attr(&rendered.image_html, "img", "style").unwrap();
        assert!(style.contains("width: 120px"));
        assert!(style.contains("height: 100px"));
    }

    #[test]
    fn test_title_and_description_markup() {
        let rendered = renderer()
            .render_item(&item(ItemKind::Video, &[("videoId", "a")], "Hello", "World"))
            .unwrap();
        assert!(rendered.title_html.ends_with("<h3>Hello</h3></a>"));
        assert_eq!(
            rendered.description_html,
            r#"<p style="word-wrap: break-word;">World</p>"#
        );
    }

    #[test]
    fn test_markup_in_text_is_escaped() {
        let rendered = renderer()
            .render_item(&item(
                ItemKind::Video,
                &[("videoId", "a")],
                "<script>alert(1)</script>",
                "Tom & Jerry",
            ))
            .unwrap();
        assert!(!rendered.title_html.contains("<script>"));
        assert!(rendered.title_html.contains("&lt;script&gt;"));
        assert_eq!(text(&rendered.title_html, "h3"), "<script>alert(1)</script>");
        assert!(rendered.description_html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_quote_in_id_cannot_break_attribute() {
        let rendered = renderer()
            .render_item(&item(
                ItemKind::Video,
                &[("videoId", r#"a" onclick="x"#)],
                "t",
                "d",
            ))
            .unwrap();
        assert_eq!(attr(&rendered.title_html, "a", "onclick"), None);
    }

    #[test]
    fn test_byline_empty_without_channel_or_date() {
        let rendered = renderer()
            .render_item(&item(ItemKind::Video, &[("videoId", "a")], "t", "d"))
            .unwrap();
        assert!(rendered.byline_html.is_empty());
    }

    #[test]
    fn test_byline_with_channel_and_date() {
        let mut search_item = item(ItemKind::Video, &[("videoId", "a")], "t", "d");
        search_item.channel_title = "Rust Channel".to_string();
        search_item.published_at = chrono::DateTime::parse_from_rfc3339("2020-05-17T09:00:00Z")
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc));
        let rendered = renderer().render_item(&search_item).unwrap();
        let byline = text(&rendered.byline_html, "small");
        assert!(byline.contains("Rust Channel"));
        assert!(byline.contains("2020-05-17"));
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[test]
    fn test_two_items_render_two_blocks() {
        let page = renderer()
            .render_page(&response(
                1234,
                vec![
                    item(
                        ItemKind::Video,
                        &[("videoId", "abc123")],
                        "First video",
                        "First description",
                    ),
                    item(
                        ItemKind::Channel,
                        &[("channelId", "xyz")],
                        "Second channel",
                        "Second description",
                    ),
                ],
            ))
            .unwrap();

        assert!(page.contains("Found 1234 results! Displaying 2."));

        let document = Html::parse_document(&page);
        let result_sel = Selector::parse("li.result").unwrap();
        let title_sel = Selector::parse("h3").unwrap();
        let desc_sel = Selector::parse("p").unwrap();
        let link_sel = Selector::parse("a[href]").unwrap();

        let blocks: Vec<_> = document.select(&result_sel).collect();
        assert_eq!(blocks.len(), 2);

        let expected = [
            ("https://www.youtube.com/watch?v=abc123", "First video", "First description"),
            ("https://www.youtube.com/channel/xyz", "Second channel", "Second description"),
        ];
        for (block, (link, title, desc)) in blocks.iter().zip(expected) {
            let href = block.select(&link_sel).next().unwrap().value().attr("href");
            assert_eq!(href, Some(link));
            let h3: String = block.select(&title_sel).next().unwrap().text().collect();
            assert_eq!(h3, title);
            let p: String = block.select(&desc_sel).next().unwrap().text().collect();
            assert_eq!(p, desc);
        }
    }

    #[test]
    fn test_page_with_no_items_has_no_blocks() {
        let page = renderer().render_page(&response(7, vec![])).unwrap();
        let document = Html::parse_document(&page);
        let result_sel = Selector::parse("li.result").unwrap();
        assert_eq!(document.select(&result_sel).count(), 0);
        assert!(page.contains("Found 7 results! Displaying 0."));
    }
}
