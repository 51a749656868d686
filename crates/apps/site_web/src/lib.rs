//! Browser bindings for the portfolio page.
//!
//! JS owns the DOM and the globe.gl instance; these exports own the state.
//! Everything crosses the boundary as JSON strings.

use std::cell::RefCell;
use std::rc::Rc;

use console_error_panic_hook::set_once;
use content::{CachedSource, CmsConfig, ContentRecord, LocationRecord, SiteContent, StaticSource};
use gallery::{FilterKey, Gallery, GalleryConfig, embed_strategy};
use journey::{JourneyTour, TourConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod fetch;
mod globe;

pub use fetch::GlooSource;
pub use globe::JsGlobeRenderer;

thread_local! {
    /// One cached source per page, rebuilt when the config changes.
    static SOURCE: RefCell<Option<(CmsConfig, Rc<CachedSource<GlooSource>>)>> =
        const { RefCell::new(None) };
}

pub(crate) fn console_log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(crate) fn console_warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json(value: &impl Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_err)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

fn cached_source(config: &CmsConfig) -> Rc<CachedSource<GlooSource>> {
    SOURCE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some((cached_config, source)) = slot.as_ref() {
            if cached_config == config {
                return Rc::clone(source);
            }
        }
        let source = Rc::new(CachedSource::new(
            GlooSource::new(config.clone()),
            config.cache_ttl_secs,
        ));
        *slot = Some((config.clone(), Rc::clone(&source)));
        source
    })
}

/// Resolve every page section; never rejects because of the backend.
///
/// `config_json` is a camelCase `CmsConfig`. Without credentials the static
/// content (or nothing, with `"fallback": "empty"`) is returned.
#[wasm_bindgen]
pub async fn load_site_content(config_json: Option<String>) -> Result<String, JsValue> {
    let config = match config_json.as_deref() {
        Some(raw) if !raw.trim().is_empty() => CmsConfig::from_json(raw).map_err(js_err)?,
        _ => CmsConfig::default(),
    };

    let site = if config.is_remote_configured() {
        let source = cached_source(&config);
        SiteContent::load(source.as_ref(), config.fallback).await
    } else {
        console_log("CMS not configured; using built-in content");
        SiteContent::load(&StaticSource::new(), config.fallback).await
    };
    to_json(&site)
}

/// Forget cached CMS responses so the next load refetches every section.
#[wasm_bindgen]
pub fn clear_content_cache() {
    SOURCE.with(|slot| {
        if let Some((_, source)) = slot.borrow().as_ref() {
            source.clear();
        }
    });
}

/// The career globe tour.
#[wasm_bindgen]
pub struct JourneyView {
    tour: JourneyTour<JsGlobeRenderer>,
}

#[wasm_bindgen]
impl JourneyView {
    /// `records_json` is an array of journey points; `config_json` an optional
    /// camelCase `TourConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        globe: JsValue,
        records_json: &str,
        config_json: Option<String>,
    ) -> Result<JourneyView, JsValue> {
        let records: Vec<LocationRecord> = serde_json::from_str(records_json).map_err(js_err)?;
        let config = match config_json {
            Some(raw) => serde_json::from_str::<TourConfig>(&raw).map_err(js_err)?,
            None => TourConfig::default(),
        };
        let renderer = JsGlobeRenderer::new(globe)?;
        let tour = JourneyTour::new(records, renderer, config).map_err(js_err)?;
        Ok(JourneyView { tour })
    }

    pub fn start(&mut self) {
        self.tour.start();
    }

    pub fn next(&mut self) -> bool {
        self.tour.next()
    }

    pub fn previous(&mut self) -> bool {
        self.tour.previous()
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.tour.jump_to(index)
    }

    pub fn index(&self) -> usize {
        self.tour.navigator().state().index()
    }

    pub fn can_go_previous(&self) -> bool {
        self.tour.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.tour.can_go_next()
    }

    pub fn current_json(&self) -> Result<String, JsValue> {
        to_json(self.tour.current())
    }

    pub fn progress_json(&self) -> Result<String, JsValue> {
        to_json(&self.tour.progress())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterChip {
    key: FilterKey,
    label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageItem<'a> {
    record: &'a ContentRecord,
    frame_url: Option<String>,
    embed: gallery::EmbedStrategy,
}

/// The media gallery grid.
#[wasm_bindgen]
pub struct MediaGalleryView {
    gallery: Gallery,
}

#[wasm_bindgen]
impl MediaGalleryView {
    #[wasm_bindgen(constructor)]
    pub fn new(records_json: &str, page_size: Option<usize>) -> Result<MediaGalleryView, JsValue> {
        let records: Vec<ContentRecord> = serde_json::from_str(records_json).map_err(js_err)?;
        let mut config = GalleryConfig::default();
        if let Some(size) = page_size {
            config.page_size = size;
        }
        Ok(MediaGalleryView {
            gallery: Gallery::new(records, config),
        })
    }

    /// Returns the new filter/page state.
    pub fn set_filter(&mut self, key: &str) -> Result<String, JsValue> {
        let key: FilterKey = key.parse().map_err(|e: String| JsValue::from_str(&e))?;
        to_json(&self.gallery.set_filter(key))
    }

    /// Returns the new filter/page state.
    pub fn set_page(&mut self, page: usize) -> Result<String, JsValue> {
        to_json(&self.gallery.set_page(page))
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(&self.gallery.state())
    }

    pub fn has_previous_page(&self) -> bool {
        self.gallery.state().has_previous()
    }

    pub fn has_next_page(&self) -> bool {
        self.gallery.state().has_next()
    }

    /// Items on the current page, each with its embed choice.
    pub fn page_json(&self) -> Result<String, JsValue> {
        let items: Vec<PageItem<'_>> = self
            .gallery
            .page_embeds()
            .into_iter()
            .map(|(record, embed)| PageItem {
                record,
                frame_url: embed.frame_url(),
                embed,
            })
            .collect();
        to_json(&items)
    }

    pub fn filters_json(&self) -> Result<String, JsValue> {
        let chips: Vec<FilterChip> = self
            .gallery
            .available_filters()
            .into_iter()
            .map(|key| FilterChip {
                key,
                label: key.label(),
            })
            .collect();
        to_json(&chips)
    }

    /// Embed choice for one record, `null` when the id is unknown.
    pub fn embed_json(&self, id: &str) -> Result<String, JsValue> {
        let embed = self
            .gallery
            .records()
            .iter()
            .find(|r| r.id == id)
            .map(embed_strategy);
        to_json(&embed)
    }
}
