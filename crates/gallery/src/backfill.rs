//! One-time migration for records authored before the `platform` field.
//!
//! This is the only place that looks at a record's URL to decide what it is.
//! It fills gaps and never overwrites authored values.

use content::{ContentRecord, Platform};
use serde::Serialize;

use crate::youtube::{self, ThumbnailQuality, host_matches, parse_loose};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BackfillField {
    Platform,
    VideoId,
    Thumbnail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillChange {
    pub id: String,
    pub field: BackfillField,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillReport {
    pub changes: Vec<BackfillChange>,
    /// Records still without a platform whose URL matched no known host.
    pub unrecognized: Vec<String>,
}

impl BackfillReport {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn push(&mut self, id: &str, field: BackfillField, value: &str) {
        tracing::debug!(id, ?field, value, "backfilled");
        self.changes.push(BackfillChange {
            id: id.to_string(),
            field,
            value: value.to_string(),
        });
    }
}

/// Platform of a URL by its host, if it is one we embed.
pub fn sniff_platform(raw: &str) -> Option<Platform> {
    let url = parse_loose(raw)?;
    let host = url.host_str()?;
    if youtube::is_youtube_host(host) {
        Some(Platform::Youtube)
    } else if host_matches(host, "linkedin.com") {
        Some(Platform::Linkedin)
    } else if host_matches(host, "twitter.com") || host_matches(host, "x.com") {
        Some(Platform::Twitter)
    } else {
        None
    }
}

pub fn backfill(records: &mut [ContentRecord]) -> BackfillReport {
    let mut report = BackfillReport::default();
    for record in records.iter_mut() {
        if record.platform.is_none() {
            match sniff_platform(&record.url) {
                Some(platform) => {
                    record.platform = Some(platform);
                    report.push(&record.id, BackfillField::Platform, platform.as_str());
                }
                None => report.unrecognized.push(record.id.clone()),
            }
        }

        if record.platform != Some(Platform::Youtube) {
            continue;
        }
        if record.video_id.is_none() {
            if let Some(id) = youtube::extract_video_id(&record.url) {
                report.push(&record.id, BackfillField::VideoId, &id);
                record.video_id = Some(id);
            }
        }
        if record.thumbnail.is_none() {
            if let Some(id) = record.video_id.as_deref() {
                let thumb = youtube::thumbnail_url(id, ThumbnailQuality::default());
                report.push(&record.id, BackfillField::Thumbnail, &thumb);
                record.thumbnail = Some(thumb);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use content::{Category, ContentRecord, Platform};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sniffs_known_hosts() {
        assert_eq!(
            sniff_platform("https://youtu.be/abc"),
            Some(Platform::Youtube)
        );
        assert_eq!(
            sniff_platform("https://www.linkedin.com/posts/xyz"),
            Some(Platform::Linkedin)
        );
        assert_eq!(
            sniff_platform("https://x.com/someone/status/1"),
            Some(Platform::Twitter)
        );
        assert_eq!(sniff_platform("https://medium.com/@me/post"), None);
    }

    #[test]
    fn fills_youtube_fields() {
        let mut records = vec![ContentRecord::new(
            "t1",
            "Talk",
            Category::Talk,
            "https://www.youtube.com/watch?v=abc123&index=2",
        )];
        let report = backfill(&mut records);

        let r = &records[0];
        assert_eq!(r.platform, Some(Platform::Youtube));
        assert_eq!(r.video_id.as_deref(), Some("abc123"));
        assert_eq!(
            r.thumbnail.as_deref(),
            Some("https://img.youtube.com/vi/abc123/maxresdefault.jpg")
        );
        let fields: Vec<BackfillField> = report.changes.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![
                BackfillField::Platform,
                BackfillField::VideoId,
                BackfillField::Thumbnail
            ]
        );
    }

    #[test]
    fn keeps_authored_values_and_reports_unknown_urls() {
        let mut authored = ContentRecord::new(
            "a1",
            "Post",
            Category::Article,
            "https://www.linkedin.com/pulse/post",
        );
        authored.platform = Some(Platform::Twitter);
        let blog = ContentRecord::new("a2", "Blog", Category::Article, "https://blog.example.com/p");
        let mut records = vec![authored, blog];

        let report = backfill(&mut records);
        assert!(report.is_empty());
        assert_eq!(records[0].platform, Some(Platform::Twitter));
        assert_eq!(report.unrecognized, vec!["a2".to_string()]);
    }

    #[test]
    fn second_run_is_a_no_op() {
        let mut records = vec![ContentRecord::new(
            "t1",
            "Talk",
            Category::Talk,
            "https://youtu.be/abc123",
        )];
        backfill(&mut records);
        assert!(backfill(&mut records).is_empty());
    }
}
