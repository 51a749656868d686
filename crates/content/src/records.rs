use foundation::LatLng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_POINT_COLOR: &str = "#3B82F6";

/// A stop on the career journey shown on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Free text; "Present" is valid.
    pub year: String,
    pub icon: String,
    pub coordinates: LatLng,
    #[serde(default = "default_point_color")]
    pub color: String,
    #[serde(default)]
    pub order: i32,
}

impl LocationRecord {
    /// Records at exactly (0, 0) stand for "everywhere" and have no globe point.
    pub fn is_global(&self) -> bool {
        self.coordinates.is_origin()
    }
}

fn default_point_color() -> String {
    DEFAULT_POINT_COLOR.to_string()
}

/// Media gallery category. Drives both the filter chips and the embed choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[serde(alias = "talks", alias = "video", alias = "youtube")]
    Talk,
    #[serde(alias = "articles")]
    Article,
    ThoughtLeadership,
    #[serde(alias = "linked-in")]
    Linkedin,
    #[serde(alias = "x")]
    Twitter,
    #[serde(alias = "documents")]
    Document,
    StillBuilding,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Talk,
        Category::Article,
        Category::ThoughtLeadership,
        Category::Linkedin,
        Category::Twitter,
        Category::Document,
        Category::StillBuilding,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Talk => "talk",
            Category::Article => "article",
            Category::ThoughtLeadership => "thought-leadership",
            Category::Linkedin => "linkedin",
            Category::Twitter => "twitter",
            Category::Document => "document",
            Category::StillBuilding => "still-building",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Talk => "Talks",
            Category::Article => "Articles",
            Category::ThoughtLeadership => "Thought Leadership",
            Category::Linkedin => "LinkedIn",
            Category::Twitter => "Twitter",
            Category::Document => "Documents",
            Category::StillBuilding => "Still Building",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        let category = match norm.as_str() {
            "talk" | "talks" | "video" | "videos" | "youtube" => Category::Talk,
            "article" | "articles" => Category::Article,
            "thought-leadership" => Category::ThoughtLeadership,
            "linkedin" | "linked-in" => Category::Linkedin,
            "twitter" | "x" => Category::Twitter,
            "document" | "documents" => Category::Document,
            "still-building" => Category::StillBuilding,
            _ => return Err(format!("unknown media category: {s}")),
        };
        Ok(category)
    }
}

/// Platform hosting a piece of content, set when the item is authored.
///
/// Decoding never fails: names outside the known set become [`Platform::Other`]
/// so the item still reaches the gallery.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Youtube,
    Linkedin,
    Twitter,
    Medium,
    DevTo,
    Pdf,
    GoogleDocs,
    Other,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Medium => "medium",
            Platform::DevTo => "dev.to",
            Platform::Pdf => "pdf",
            Platform::GoogleDocs => "google-docs",
            Platform::Other => "other",
        }
    }

    /// Lenient lookup by authored name. Blank names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let norm = name.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        let platform = match norm.as_str() {
            "" => return None,
            "youtube" | "yt" => Platform::Youtube,
            "linkedin" | "linked-in" => Platform::Linkedin,
            "twitter" | "x" => Platform::Twitter,
            "medium" => Platform::Medium,
            "dev.to" | "devto" | "dev-to" => Platform::DevTo,
            "pdf" => Platform::Pdf,
            "google-docs" | "googledocs" | "gdocs" => Platform::GoogleDocs,
            _ => Platform::Other,
        };
        Some(platform)
    }

    /// Platforms whose posts are shown through their own embed widget.
    pub fn is_social(self) -> bool {
        matches!(self, Platform::Linkedin | Platform::Twitter)
    }
}

impl From<String> for Platform {
    fn from(name: String) -> Self {
        Platform::from_name(&name).unwrap_or(Platform::Other)
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.as_str().to_string()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media gallery item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
}

impl ContentRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            url: url.into(),
            platform: None,
            embed_url: None,
            video_id: None,
            thumbnail: None,
            description: None,
            publish_date: None,
            featured: false,
            order: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: String,
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub title: String,
    pub description: String,
    pub link_text: String,
    pub link_url: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub contact_cards: Vec<ContactCard>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub copyright_text: String,
}

/// Records carrying an explicit authoring order.
pub trait Ordered {
    fn order(&self) -> i32;
}

impl Ordered for LocationRecord {
    fn order(&self) -> i32 {
        self.order
    }
}

impl Ordered for ContentRecord {
    fn order(&self) -> i32 {
        self.order
    }
}

impl Ordered for Achievement {
    fn order(&self) -> i32 {
        self.order
    }
}

/// Stable ascending sort by `order`; equal orders keep their input position.
pub fn sort_by_order<T: Ordered>(records: &mut [T]) {
    records.sort_by_key(|r| r.order());
}
