use content::{ContentRecord, sort_by_order};
use serde::{Deserialize, Serialize};

use crate::embed::{EmbedStrategy, embed_strategy};
use crate::filter::{FilterKey, filter_records};
use crate::paginate::{
    DEFAULT_PAGE_SIZE, FilterPaginationState, apply_filter, current_slice, set_page,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    pub page_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Loaded media records plus the current filter/page selection.
#[derive(Debug, Clone)]
pub struct Gallery {
    records: Vec<ContentRecord>,
    page_size: usize,
    state: FilterPaginationState,
}

impl Gallery {
    pub fn new(mut records: Vec<ContentRecord>, config: GalleryConfig) -> Self {
        sort_by_order(&mut records);
        let page_size = config.page_size.max(1);
        let state = FilterPaginationState::new(&records, page_size);
        Self {
            records,
            page_size,
            state,
        }
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn state(&self) -> FilterPaginationState {
        self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_filter(&mut self, key: FilterKey) -> FilterPaginationState {
        self.state = apply_filter(&self.state, &self.records, key, self.page_size);
        self.state
    }

    pub fn set_page(&mut self, page: usize) -> FilterPaginationState {
        self.state = set_page(&self.state, page);
        self.state
    }

    pub fn filtered(&self) -> Vec<&ContentRecord> {
        filter_records(&self.records, self.state.filter)
    }

    pub fn page_items(&self) -> Vec<&ContentRecord> {
        let filtered = self.filtered();
        current_slice(&filtered, self.state.page, self.page_size).to_vec()
    }

    /// Embed choice for each item on the current page, in order.
    pub fn page_embeds(&self) -> Vec<(&ContentRecord, EmbedStrategy)> {
        self.page_items()
            .into_iter()
            .map(|record| (record, embed_strategy(record)))
            .collect()
    }

    /// Chips to show: all, featured when anything is featured, then each
    /// category present, in order of first appearance.
    pub fn available_filters(&self) -> Vec<FilterKey> {
        let mut keys = vec![FilterKey::All];
        if self.records.iter().any(|r| r.featured) {
            keys.push(FilterKey::Featured);
        }
        for record in &self.records {
            let key = FilterKey::Category(record.category);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use content::{Category, ContentRecord};
    use pretty_assertions::assert_eq;

    use super::{Gallery, GalleryConfig};
    use crate::embed::EmbedStrategy;
    use crate::filter::FilterKey;

    fn record(id: &str, category: Category, order: i32) -> ContentRecord {
        let mut r = ContentRecord::new(id, id, category, format!("https://example.com/{id}"));
        r.order = order;
        r
    }

    fn sample() -> Gallery {
        let mut records = vec![
            record("c", Category::Article, 3),
            record("a", Category::Talk, 1),
            record("b", Category::StillBuilding, 2),
            record("d", Category::Talk, 4),
        ];
        records[1].featured = true;
        records[1].video_id = Some("vid".into());
        Gallery::new(records, GalleryConfig { page_size: 2 })
    }

    #[test]
    fn records_are_ordered_and_paged() {
        let mut gallery = sample();
        let ids: Vec<&str> = gallery.page_items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        gallery.set_page(2);
        let ids: Vec<&str> = gallery.page_items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "d"]);
    }

    #[test]
    fn filter_change_returns_to_first_page() {
        let mut gallery = sample();
        gallery.set_page(2);
        let state = gallery.set_filter(Category::Talk.into());
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 1);
        assert_eq!(gallery.filtered().len(), 2);
    }

    #[test]
    fn available_filters_follow_first_appearance() {
        assert_eq!(
            sample().available_filters(),
            vec![
                FilterKey::All,
                FilterKey::Featured,
                FilterKey::Category(Category::Talk),
                FilterKey::Category(Category::StillBuilding),
                FilterKey::Category(Category::Article),
            ]
        );
    }

    #[test]
    fn page_embeds_pair_records_with_strategies() {
        let gallery = sample();
        let embeds = gallery.page_embeds();
        assert_eq!(
            embeds[0].1,
            EmbedStrategy::Video {
                video_id: "vid".into()
            }
        );
        assert!(matches!(embeds[1].1, EmbedStrategy::ImageFallback { .. }));
    }

    #[test]
    fn items_with_publishing_platforms_stay_in_the_grid() {
        let raw = r#"[
            {"id": "art1", "title": "Scaling", "category": "article",
             "url": "https://medium.com/@someone/scaling", "platform": "medium",
             "thumbnail": "https://miro.medium.com/t.png", "order": 1},
            {"id": "doc1", "title": "Patterns", "category": "document",
             "url": "https://files.example.org/patterns.pdf", "platform": "pdf",
             "embedUrl": "https://docs.google.com/viewer?url=patterns.pdf", "order": 2}
        ]"#;
        let records: Vec<ContentRecord> = serde_json::from_str(raw).unwrap();
        let gallery = Gallery::new(records, GalleryConfig::default());

        let embeds: Vec<EmbedStrategy> =
            gallery.page_embeds().into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            embeds,
            vec![
                EmbedStrategy::ImageFallback {
                    thumbnail: Some("https://miro.medium.com/t.png".into()),
                    url: "https://medium.com/@someone/scaling".into(),
                },
                EmbedStrategy::Document {
                    embed_url: "https://docs.google.com/viewer?url=patterns.pdf".into()
                },
            ]
        );
    }

    #[test]
    fn default_page_size_is_six() {
        assert_eq!(GalleryConfig::default().page_size, 6);
        let cfg: GalleryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.page_size, 6);
    }
}
