use serde::Serialize;

use crate::config::FallbackPolicy;
use crate::error::FetchError;
use crate::fallback;
use crate::records::{
    AboutContent, Achievement, ContentRecord, FooterContent, HeroContent, LocationRecord, Ordered,
    sort_by_order,
};
use crate::source::ContentSource;
use crate::wire::FromEntry;

/// Fetch and decode every entry of `T`'s kind, ordered by `order`.
///
/// Malformed entries are skipped with a warning rather than failing the list.
pub async fn fetch_all<T, S>(source: &S) -> Result<Vec<T>, FetchError>
where
    T: FromEntry + Ordered,
    S: ContentSource + ?Sized,
{
    let query = T::KIND.query();
    let response = source.entries(&query).await?;
    let mut records: Vec<T> = response
        .items
        .iter()
        .filter_map(|entry| match T::from_entry(entry, &response.includes) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(%err, "skipping malformed entry");
                None
            }
        })
        .collect();
    sort_by_order(&mut records);
    Ok(records)
}

/// Fetch the first decodable entry of a singleton kind.
pub async fn fetch_one<T, S>(source: &S) -> Result<Option<T>, FetchError>
where
    T: FromEntry,
    S: ContentSource + ?Sized,
{
    let query = T::KIND.query();
    let response = source.entries(&query).await?;
    for entry in &response.items {
        match T::from_entry(entry, &response.includes) {
            Ok(record) => return Ok(Some(record)),
            Err(err) => tracing::warn!(%err, "skipping malformed entry"),
        }
    }
    Ok(None)
}

/// Everything the page renders, after fallbacks have been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: Option<HeroContent>,
    pub about: Option<AboutContent>,
    pub achievements: Vec<Achievement>,
    pub journey: Vec<LocationRecord>,
    pub media: Vec<ContentRecord>,
    pub footer: Option<FooterContent>,
}

impl SiteContent {
    /// The baked-in page, without touching any backend.
    pub fn fallback() -> Self {
        Self {
            hero: Some(fallback::hero()),
            about: Some(fallback::about()),
            achievements: fallback::achievements(),
            journey: fallback::journey_points(),
            media: fallback::media_items(),
            footer: Some(fallback::footer()),
        }
    }

    /// Load every section. Each section falls back independently; a failure
    /// is logged and never propagated.
    pub async fn load<S>(source: &S, policy: FallbackPolicy) -> Self
    where
        S: ContentSource + ?Sized,
    {
        let hero = single("hero", fetch_one(source).await, policy, fallback::hero);
        let about = single("about", fetch_one(source).await, policy, fallback::about);
        let achievements = list(
            "achievements",
            fetch_all(source).await,
            policy,
            fallback::achievements,
        );
        let journey = list(
            "journey points",
            fetch_all(source).await,
            policy,
            fallback::journey_points,
        );
        let media = list("media items", fetch_all(source).await, policy, fallback::media_items);
        let footer = single("footer", fetch_one(source).await, policy, fallback::footer);

        Self {
            hero,
            about,
            achievements,
            journey,
            media,
            footer,
        }
    }
}

fn single<T>(
    section: &str,
    fetched: Result<Option<T>, FetchError>,
    policy: FallbackPolicy,
    fallback: impl FnOnce() -> T,
) -> Option<T> {
    match fetched {
        Ok(Some(record)) => return Some(record),
        Ok(None) => tracing::debug!(section, "no entry published"),
        Err(err) => tracing::warn!(section, %err, "error fetching content"),
    }
    match policy {
        FallbackPolicy::Static => Some(fallback()),
        FallbackPolicy::Empty => None,
    }
}

fn list<T>(
    section: &str,
    fetched: Result<Vec<T>, FetchError>,
    policy: FallbackPolicy,
    fallback: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match fetched {
        Ok(records) if !records.is_empty() => return records,
        Ok(_) => tracing::debug!(section, "no entries published"),
        Err(err) => tracing::warn!(section, %err, "error fetching content"),
    }
    match policy {
        FallbackPolicy::Static => fallback(),
        FallbackPolicy::Empty => Vec::new(),
    }
}
