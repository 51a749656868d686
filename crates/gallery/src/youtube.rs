//! YouTube URL helpers.

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    #[default]
    MaxResDefault,
    HqDefault,
    MqDefault,
    Default,
}

impl ThumbnailQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            ThumbnailQuality::MaxResDefault => "maxresdefault",
            ThumbnailQuality::HqDefault => "hqdefault",
            ThumbnailQuality::MqDefault => "mqdefault",
            ThumbnailQuality::Default => "default",
        }
    }
}

/// True for youtube.com, youtu.be and their subdomains.
pub fn is_youtube_host(host: &str) -> bool {
    ["youtube.com", "youtu.be", "youtube-nocookie.com"]
        .iter()
        .any(|domain| host_matches(host, domain))
}

pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Parse with an `https://` retry for scheme-less input.
pub(crate) fn parse_loose(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    Url::parse(raw)
        .ok()
        .or_else(|| Url::parse(&format!("https://{raw}")).ok())
        .filter(|url| url.host_str().is_some())
}

/// Video id from watch, short (`youtu.be`), embed and legacy `/v/` URLs.
pub fn extract_video_id(raw: &str) -> Option<String> {
    let url = parse_loose(raw)?;
    let host = url.host_str()?;
    if !is_youtube_host(host) {
        return None;
    }
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let id = if host_matches(host, "youtu.be") {
        segments.next().map(str::to_string)
    } else {
        match segments.next()? {
            "watch" => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            "embed" | "v" => segments.next().map(str::to_string),
            _ => None,
        }
    };
    id.filter(|id| !id.is_empty())
}

pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{video_id}/{}.jpg", quality.as_str())
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ids_from_known_shapes() {
        let cases = [
            "https://www.youtube.com/watch?v=4OkySZO-G2Q",
            "https://www.youtube.com/watch?v=4OkySZO-G2Q&list=PL0&index=4",
            "https://youtu.be/4OkySZO-G2Q?t=30",
            "https://www.youtube.com/embed/4OkySZO-G2Q",
            "https://youtube.com/v/4OkySZO-G2Q",
            "youtube.com/watch?v=4OkySZO-G2Q",
            "https://m.youtube.com/watch?feature=share&v=4OkySZO-G2Q",
        ];
        for case in cases {
            assert_eq!(extract_video_id(case).as_deref(), Some("4OkySZO-G2Q"), "{case}");
        }
    }

    #[test]
    fn rejects_other_hosts_and_shapes() {
        assert_eq!(extract_video_id("https://vimeo.com/watch?v=abc"), None);
        assert_eq!(extract_video_id("https://notyoutube.com/watch?v=abc"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/playlist?list=PL0"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(extract_video_id("not a url"), None);
    }

    #[test]
    fn builds_urls() {
        assert_eq!(
            thumbnail_url("abc", ThumbnailQuality::default()),
            "https://img.youtube.com/vi/abc/maxresdefault.jpg"
        );
        assert_eq!(
            thumbnail_url("abc", ThumbnailQuality::HqDefault),
            "https://img.youtube.com/vi/abc/hqdefault.jpg"
        );
        assert_eq!(embed_url("abc"), "https://www.youtube.com/embed/abc");
    }

    #[test]
    fn host_matching_respects_label_boundaries() {
        assert!(host_matches("www.linkedin.com", "linkedin.com"));
        assert!(host_matches("linkedin.com", "linkedin.com"));
        assert!(!host_matches("evillinkedin.com", "linkedin.com"));
    }
}
