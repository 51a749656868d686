use content::{Category, ContentRecord, Platform};
use serde::Serialize;

use crate::youtube::{self, ThumbnailQuality};

/// How the host should present one gallery card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum EmbedStrategy {
    Video { video_id: String },
    Social { platform: Platform, url: String },
    Document { embed_url: String },
    ImageFallback { thumbnail: Option<String>, url: String },
}

impl EmbedStrategy {
    /// Iframe source for cards that embed a player or viewer.
    pub fn frame_url(&self) -> Option<String> {
        match self {
            EmbedStrategy::Video { video_id } => Some(youtube::embed_url(video_id)),
            EmbedStrategy::Document { embed_url } => Some(embed_url.clone()),
            EmbedStrategy::Social { .. } | EmbedStrategy::ImageFallback { .. } => None,
        }
    }
}

/// A record whose category and platform do not name a usable embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedEmbed {
    pub id: String,
    pub category: Category,
    pub reason: &'static str,
}

impl std::fmt::Display for UnresolvedEmbed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} item {}: {}", self.category, self.id, self.reason)
    }
}

impl std::error::Error for UnresolvedEmbed {}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Dispatch on the record's category and its explicit platform.
///
/// The URL itself is never inspected; records authored before `platform`
/// existed are fixed up by [`crate::backfill`].
pub fn resolve_embed(record: &ContentRecord) -> Result<EmbedStrategy, UnresolvedEmbed> {
    let unresolved = |reason| UnresolvedEmbed {
        id: record.id.clone(),
        category: record.category,
        reason,
    };
    let video = || {
        present(&record.video_id).map(|id| EmbedStrategy::Video {
            video_id: id.to_string(),
        })
    };
    let social = |platform| EmbedStrategy::Social {
        platform,
        url: record.url.clone(),
    };
    let document = || {
        present(&record.embed_url).map(|embed_url| EmbedStrategy::Document {
            embed_url: embed_url.to_string(),
        })
    };

    match record.category {
        Category::Talk => video().ok_or_else(|| unresolved("talk without a video id")),
        Category::Linkedin => Ok(social(Platform::Linkedin)),
        Category::Twitter => Ok(social(Platform::Twitter)),
        Category::Article | Category::ThoughtLeadership => match record.platform {
            Some(Platform::Youtube) => {
                video().ok_or_else(|| unresolved("youtube item without a video id"))
            }
            Some(platform) if platform.is_social() => Ok(social(platform)),
            _ => document().ok_or_else(|| unresolved("no social platform and no embed url")),
        },
        Category::Document => document().ok_or_else(|| unresolved("document without an embed url")),
        Category::StillBuilding => Ok(image_fallback(record)),
    }
}

/// Like [`resolve_embed`], but never fails: unresolved records get the image card.
pub fn embed_strategy(record: &ContentRecord) -> EmbedStrategy {
    resolve_embed(record).unwrap_or_else(|err| {
        tracing::debug!(%err, "falling back to image card");
        image_fallback(record)
    })
}

fn image_fallback(record: &ContentRecord) -> EmbedStrategy {
    let thumbnail = present(&record.thumbnail).map(str::to_string).or_else(|| {
        present(&record.video_id).map(|id| youtube::thumbnail_url(id, ThumbnailQuality::default()))
    });
    EmbedStrategy::ImageFallback {
        thumbnail,
        url: record.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use content::{Category, ContentRecord, Platform};
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(category: Category) -> ContentRecord {
        ContentRecord::new("x", "X", category, "https://example.com/x")
    }

    #[test]
    fn talk_uses_video_id() {
        let mut r = record(Category::Talk);
        r.video_id = Some("abc".into());
        assert_eq!(
            embed_strategy(&r),
            EmbedStrategy::Video {
                video_id: "abc".into()
            }
        );
    }

    #[test]
    fn talk_without_video_id_falls_back_to_image() {
        let mut r = record(Category::Talk);
        r.thumbnail = Some("https://img.example.com/t.jpg".into());
        assert!(resolve_embed(&r).is_err());
        assert_eq!(
            embed_strategy(&r),
            EmbedStrategy::ImageFallback {
                thumbnail: Some("https://img.example.com/t.jpg".into()),
                url: "https://example.com/x".into(),
            }
        );
    }

    #[test]
    fn social_categories_embed_their_platform() {
        assert_eq!(
            embed_strategy(&record(Category::Linkedin)),
            EmbedStrategy::Social {
                platform: Platform::Linkedin,
                url: "https://example.com/x".into(),
            }
        );
        assert!(matches!(
            embed_strategy(&record(Category::Twitter)),
            EmbedStrategy::Social {
                platform: Platform::Twitter,
                ..
            }
        ));
    }

    #[test]
    fn article_dispatches_on_explicit_platform_not_url() {
        // A LinkedIn URL alone does not make a social embed.
        let mut r = record(Category::Article);
        r.url = "https://www.linkedin.com/pulse/something".into();
        assert!(resolve_embed(&r).is_err());

        r.platform = Some(Platform::Linkedin);
        assert!(matches!(
            resolve_embed(&r),
            Ok(EmbedStrategy::Social {
                platform: Platform::Linkedin,
                ..
            })
        ));
    }

    #[test]
    fn publishing_platforms_use_embed_url_or_image() {
        let mut r = record(Category::Article);
        r.platform = Some(Platform::Medium);
        r.thumbnail = Some("https://img.example.com/m.jpg".into());
        assert_eq!(
            resolve_embed(&r).unwrap_err().reason,
            "no social platform and no embed url"
        );
        assert_eq!(
            embed_strategy(&r),
            EmbedStrategy::ImageFallback {
                thumbnail: Some("https://img.example.com/m.jpg".into()),
                url: "https://example.com/x".into(),
            }
        );

        r.platform = Some(Platform::Other);
        r.embed_url = Some("https://docs.example.com/embed/2".into());
        assert_eq!(
            embed_strategy(&r),
            EmbedStrategy::Document {
                embed_url: "https://docs.example.com/embed/2".into()
            }
        );
    }

    #[test]
    fn thought_leadership_with_embed_url_is_a_document() {
        let mut r = record(Category::ThoughtLeadership);
        r.embed_url = Some("https://docs.example.com/embed/1".into());
        assert_eq!(
            embed_strategy(&r),
            EmbedStrategy::Document {
                embed_url: "https://docs.example.com/embed/1".into()
            }
        );
    }

    #[test]
    fn document_requires_embed_url() {
        let mut r = record(Category::Document);
        r.embed_url = Some("   ".into());
        let err = resolve_embed(&r).unwrap_err();
        assert_eq!(err.reason, "document without an embed url");
    }

    #[test]
    fn still_building_derives_thumbnail_from_video() {
        let mut r = record(Category::StillBuilding);
        r.video_id = Some("vid".into());
        assert_eq!(
            embed_strategy(&r),
            EmbedStrategy::ImageFallback {
                thumbnail: Some("https://img.youtube.com/vi/vid/maxresdefault.jpg".into()),
                url: "https://example.com/x".into(),
            }
        );
    }

    #[test]
    fn built_in_media_reaches_every_embed_kind() {
        let kinds: Vec<&str> = content::fallback::media_items()
            .iter()
            .map(|r| match embed_strategy(r) {
                EmbedStrategy::Video { .. } => "video",
                EmbedStrategy::Social { .. } => "social",
                EmbedStrategy::Document { .. } => "document",
                EmbedStrategy::ImageFallback { .. } => "image",
            })
            .collect();
        for kind in ["video", "social", "document", "image"] {
            assert!(kinds.contains(&kind), "no {kind} embed in built-in media");
        }
    }

    #[test]
    fn frame_url_only_for_players_and_viewers() {
        let video = EmbedStrategy::Video {
            video_id: "abc".into(),
        };
        assert_eq!(
            video.frame_url().as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );
        let doc = EmbedStrategy::Document {
            embed_url: "https://docs.example.com/e".into(),
        };
        assert_eq!(doc.frame_url().as_deref(), Some("https://docs.example.com/e"));
        assert_eq!(embed_strategy(&record(Category::Linkedin)).frame_url(), None);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(EmbedStrategy::Document {
            embed_url: "u".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "document", "embedUrl": "u" }));
    }
}
