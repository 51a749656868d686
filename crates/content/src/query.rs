use serde::{Deserialize, Serialize};

use crate::config::CmsConfig;
use crate::error::ConfigError;

/// The six content types the site reads from the CMS.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Hero,
    About,
    JourneyPoint,
    Achievements,
    MediaItem,
    Footer,
}

impl ContentKind {
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Hero,
        ContentKind::About,
        ContentKind::JourneyPoint,
        ContentKind::Achievements,
        ContentKind::MediaItem,
        ContentKind::Footer,
    ];

    /// CMS content type id.
    pub fn content_type(self) -> &'static str {
        match self {
            ContentKind::Hero => "hero",
            ContentKind::About => "about",
            ContentKind::JourneyPoint => "journeyPoint",
            ContentKind::Achievements => "achievements",
            ContentKind::MediaItem => "mediaItem",
            ContentKind::Footer => "footer",
        }
    }

    pub fn from_content_type(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.content_type().eq_ignore_ascii_case(s))
    }

    /// Hero, about and footer are single entries; the rest are ordered lists.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            ContentKind::Hero | ContentKind::About | ContentKind::Footer
        )
    }

    pub fn query(self) -> EntriesQuery {
        let base = EntriesQuery::new(self);
        match self {
            ContentKind::Hero | ContentKind::Footer => base.limit(1),
            ContentKind::About => base.limit(1).include(2),
            ContentKind::JourneyPoint => base.order_by_field("order").include(2),
            ContentKind::Achievements => base.order_by_field("order").limit(50),
            ContentKind::MediaItem => base.order_by_field("order").limit(50).include(2),
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.content_type())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::from_content_type(s) {
            return Ok(kind);
        }
        match s.to_ascii_lowercase().as_str() {
            "journey" | "journey-point" | "journey-points" => Ok(ContentKind::JourneyPoint),
            "media" | "media-item" | "media-items" => Ok(ContentKind::MediaItem),
            "achievement" => Ok(ContentKind::Achievements),
            other => Err(format!("unknown content kind: {other}")),
        }
    }
}

/// A delivery-API entries query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntriesQuery {
    pub kind: ContentKind,
    pub order: Option<String>,
    pub limit: Option<u32>,
    pub include: Option<u8>,
}

impl EntriesQuery {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            order: None,
            limit: None,
            include: None,
        }
    }

    pub fn order_by_field(mut self, field: &str) -> Self {
        self.order = Some(format!("fields.{field}"));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Depth of linked entries/assets resolved into `includes`.
    pub fn include(mut self, depth: u8) -> Self {
        self.include = Some(depth);
        self
    }

    /// Query parameters, excluding credentials, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("content_type", self.kind.content_type().to_string())];
        if let Some(order) = &self.order {
            params.push(("order", order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(include) = self.include {
            params.push(("include", include.to_string()));
        }
        params
    }

    /// Identity of the query for caching. Never contains the access token.
    pub fn cache_key(&self) -> String {
        self.params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn to_url(&self, config: &CmsConfig) -> Result<url::Url, ConfigError> {
        let space = config.require_space_id()?;
        let token = config.require_access_token()?;
        let base = format!(
            "https://{}/spaces/{}/environments/{}/entries",
            config.host, space, config.environment
        );
        let mut url = url::Url::parse(&base).map_err(|_| ConfigError::Invalid {
            key: "host",
            value: config.host.clone(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_token", token);
            for (k, v) in self.params() {
                pairs.append_pair(k, &v);
            }
        }
        Ok(url)
    }
}
