//! Delivery-API JSON as returned by `GET /spaces/{space}/environments/{env}/entries`.
//!
//! Only the parts the site reads are modeled. Linked assets are resolved
//! against `includes.Asset` and turned into absolute `https:` URLs.

use foundation::LatLng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::query::ContentKind;
use crate::records::{
    AboutContent, Achievement, Category, ContactCard, ContentRecord, DEFAULT_POINT_COLOR,
    FooterContent, HeroContent, LocationRecord, Platform, SocialLink,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub includes: Includes,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

impl EntriesResponse {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub sys: Sys,
    #[serde(default)]
    pub fields: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Asset>,
}

impl Includes {
    pub fn asset_url(&self, id: &str) -> Option<String> {
        self.assets
            .iter()
            .find(|a| a.sys.id == id)
            .map(|a| absolute_asset_url(&a.fields.file.url))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub sys: Sys,
    pub fields: AssetFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFields {
    pub file: AssetFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFile {
    pub url: String,
}

/// An asset field: either already resolved inline, or a link into `includes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetRef {
    Inline { fields: AssetFields },
    Link { sys: Sys },
    Url(String),
}

impl AssetRef {
    pub fn resolve(&self, includes: &Includes) -> Option<String> {
        match self {
            AssetRef::Inline { fields } => Some(absolute_asset_url(&fields.file.url)),
            AssetRef::Link { sys } => includes.asset_url(&sys.id),
            AssetRef::Url(url) if url.trim().is_empty() => None,
            AssetRef::Url(url) => Some(absolute_asset_url(url)),
        }
    }
}

/// Asset URLs come back protocol-relative (`//images.ctfassets.net/...`).
pub fn absolute_asset_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

/// Conversion from a raw entry into a typed record.
pub trait FromEntry: Sized {
    const KIND: ContentKind;

    fn from_entry(entry: &Entry, includes: &Includes) -> Result<Self, DecodeError>;
}

fn decode_fields<T: DeserializeOwned>(kind: ContentKind, entry: &Entry) -> Result<T, DecodeError> {
    serde_json::from_value(entry.fields.clone())
        .map_err(|e| DecodeError::new(kind, entry.sys.id.clone(), e.to_string()))
}

fn resolve_opt(asset: &Option<AssetRef>, includes: &Includes) -> Option<String> {
    asset.as_ref().and_then(|a| a.resolve(includes))
}

/// Years are sometimes authored as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_string(self) -> String {
        match self {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// CMS location field.
#[derive(Debug, Clone, Copy, Deserialize)]
struct CmsLocation {
    lat: f64,
    #[serde(alias = "lng")]
    lon: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JourneyPointFields {
    title: String,
    location: String,
    #[serde(default)]
    description: String,
    year: TextOrNumber,
    #[serde(default)]
    icon: String,
    coordinates: CmsLocation,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    order: i32,
}

impl FromEntry for LocationRecord {
    const KIND: ContentKind = ContentKind::JourneyPoint;

    fn from_entry(entry: &Entry, _includes: &Includes) -> Result<Self, DecodeError> {
        let f: JourneyPointFields = decode_fields(Self::KIND, entry)?;
        let coordinates = LatLng::new(f.coordinates.lat, f.coordinates.lon);
        if !coordinates.is_finite() {
            return Err(DecodeError::new(Self::KIND, entry.sys.id.clone(), "non-finite coordinates"));
        }
        Ok(LocationRecord {
            id: entry.sys.id.clone(),
            title: f.title,
            location: f.location,
            description: f.description,
            year: f.year.into_string(),
            icon: f.icon,
            coordinates,
            color: f
                .color
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_POINT_COLOR.to_string()),
            order: f.order,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaItemFields {
    title: String,
    #[serde(rename = "type")]
    category: String,
    url: String,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    embed_url: Option<String>,
    #[serde(default)]
    video_id: Option<String>,
    #[serde(default)]
    thumbnail: Option<AssetRef>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    publish_date: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    order: i32,
}

impl FromEntry for ContentRecord {
    const KIND: ContentKind = ContentKind::MediaItem;

    fn from_entry(entry: &Entry, includes: &Includes) -> Result<Self, DecodeError> {
        let f: MediaItemFields = decode_fields(Self::KIND, entry)?;
        let category: Category = f
            .category
            .parse()
            .map_err(|e: String| DecodeError::new(Self::KIND, entry.sys.id.clone(), e))?;
        Ok(ContentRecord {
            id: entry.sys.id.clone(),
            title: f.title,
            category,
            url: f.url,
            platform: f.platform.as_deref().and_then(Platform::from_name),
            embed_url: f.embed_url.filter(|u| !u.trim().is_empty()),
            video_id: f.video_id.filter(|v| !v.trim().is_empty()),
            thumbnail: resolve_opt(&f.thumbnail, includes),
            description: f.description,
            publish_date: f.publish_date,
            featured: f.featured,
            order: f.order,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AchievementFields {
    title: String,
    #[serde(default)]
    description: String,
    year: TextOrNumber,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    order: i32,
}

impl FromEntry for Achievement {
    const KIND: ContentKind = ContentKind::Achievements;

    fn from_entry(entry: &Entry, _includes: &Includes) -> Result<Self, DecodeError> {
        let f: AchievementFields = decode_fields(Self::KIND, entry)?;
        Ok(Achievement {
            id: entry.sys.id.clone(),
            title: f.title,
            description: f.description,
            year: f.year.into_string(),
            icon: f.icon,
            order: f.order,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeroFields {
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    background_image: Option<AssetRef>,
    #[serde(default, alias = "ctaButtonText")]
    button_text: Option<String>,
    #[serde(default, alias = "ctaButtonLink")]
    button_link: Option<String>,
}

impl FromEntry for HeroContent {
    const KIND: ContentKind = ContentKind::Hero;

    fn from_entry(entry: &Entry, includes: &Includes) -> Result<Self, DecodeError> {
        let f: HeroFields = decode_fields(Self::KIND, entry)?;
        Ok(HeroContent {
            title: f.title,
            subtitle: f.subtitle,
            background_image: resolve_opt(&f.background_image, includes),
            button_text: f.button_text.unwrap_or_else(|| "Learn about my journey".to_string()),
            button_link: f.button_link.unwrap_or_else(|| "#about".to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AboutFields {
    title: String,
    #[serde(default, alias = "description")]
    content: String,
    #[serde(default)]
    image: Option<AssetRef>,
}

impl FromEntry for AboutContent {
    const KIND: ContentKind = ContentKind::About;

    fn from_entry(entry: &Entry, includes: &Includes) -> Result<Self, DecodeError> {
        let f: AboutFields = decode_fields(Self::KIND, entry)?;
        Ok(AboutContent {
            title: f.title,
            paragraphs: split_paragraphs(&f.content),
            image: resolve_opt(&f.image, includes),
        })
    }
}

/// Long text fields separate paragraphs with blank lines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FooterFields {
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    contact_cards: Vec<ContactCard>,
    #[serde(default)]
    social_links: Vec<SocialLink>,
    #[serde(default)]
    copyright_text: String,
}

impl FromEntry for FooterContent {
    const KIND: ContentKind = ContentKind::Footer;

    fn from_entry(entry: &Entry, _includes: &Includes) -> Result<Self, DecodeError> {
        let f: FooterFields = decode_fields(Self::KIND, entry)?;
        Ok(FooterContent {
            title: f.title,
            subtitle: f.subtitle,
            contact_cards: f.contact_cards,
            social_links: f.social_links,
            copyright_text: f.copyright_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{EntriesResponse, FromEntry, split_paragraphs};
    use crate::records::{
        AboutContent, Category, ContentRecord, HeroContent, LocationRecord, Platform,
    };

    fn response(value: serde_json::Value) -> EntriesResponse {
        serde_json::from_value(value).expect("response")
    }

    #[test]
    fn decodes_journey_point_with_numeric_year() {
        let resp = response(json!({
            "items": [{
                "sys": { "id": "jp1" },
                "fields": {
                    "title": "The Beginning",
                    "location": "Maharashtra, India",
                    "description": "Started here.",
                    "year": 2016,
                    "icon": "🚀",
                    "coordinates": { "lat": 19.7515, "lon": 75.7139 },
                    "order": 1
                }
            }]
        }));
        let record = LocationRecord::from_entry(&resp.items[0], &resp.includes).expect("record");
        assert_eq!(record.id, "jp1");
        assert_eq!(record.year, "2016");
        assert_eq!(record.coordinates.lng, 75.7139);
        assert_eq!(record.color, "#3B82F6");
    }

    #[test]
    fn resolves_linked_thumbnail_from_includes() {
        let resp = response(json!({
            "items": [{
                "sys": { "id": "m1" },
                "fields": {
                    "title": "Polygon at Davos",
                    "type": "youtube",
                    "url": "https://www.youtube.com/watch?v=4OkySZO-G2Q",
                    "videoId": "4OkySZO-G2Q",
                    "platform": "youtube",
                    "thumbnail": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } },
                    "featured": true,
                    "order": 3
                }
            }],
            "includes": {
                "Asset": [{
                    "sys": { "id": "a1" },
                    "fields": { "file": { "url": "//images.ctfassets.net/x/thumb.jpg" } }
                }]
            }
        }));
        let record = ContentRecord::from_entry(&resp.items[0], &resp.includes).expect("record");
        assert_eq!(record.category, Category::Talk);
        assert_eq!(record.platform, Some(Platform::Youtube));
        assert_eq!(record.thumbnail.as_deref(), Some("https://images.ctfassets.net/x/thumb.jpg"));
        assert!(record.featured);
    }

    #[test]
    fn publishing_platforms_decode_instead_of_dropping_the_entry() {
        let resp = response(json!({
            "items": [
                {
                    "sys": { "id": "art1" },
                    "fields": {
                        "title": "Building Scalable Applications",
                        "type": "article",
                        "url": "https://medium.com/@someone/scaling",
                        "platform": "medium"
                    }
                },
                {
                    "sys": { "id": "doc1" },
                    "fields": {
                        "title": "System Design Patterns",
                        "type": "document",
                        "url": "https://files.example.org/patterns.pdf",
                        "platform": "pdf",
                        "embedUrl": "https://docs.google.com/viewer?url=patterns.pdf"
                    }
                },
                {
                    "sys": { "id": "art2" },
                    "fields": { "title": "Blank", "type": "article", "url": "u", "platform": " " }
                }
            ]
        }));
        let decoded: Vec<ContentRecord> = resp
            .items
            .iter()
            .map(|entry| ContentRecord::from_entry(entry, &resp.includes).expect("record"))
            .collect();
        assert_eq!(decoded[0].platform, Some(Platform::Medium));
        assert_eq!(decoded[1].platform, Some(Platform::Pdf));
        assert_eq!(
            decoded[1].embed_url.as_deref(),
            Some("https://docs.google.com/viewer?url=patterns.pdf")
        );
        assert_eq!(decoded[2].platform, None);
    }

    #[test]
    fn unknown_media_type_is_a_decode_error() {
        let resp = response(json!({
            "items": [{ "sys": { "id": "m9" }, "fields": { "title": "t", "type": "podcast", "url": "u" } }]
        }));
        let err = ContentRecord::from_entry(&resp.items[0], &resp.includes).unwrap_err();
        assert_eq!(err.entry_id, "m9");
        assert!(err.message.contains("podcast"));
    }

    #[test]
    fn hero_accepts_cta_field_names_and_inline_asset() {
        let resp = response(json!({
            "items": [{
                "sys": { "id": "h" },
                "fields": {
                    "title": "Hi",
                    "subtitle": "Builder",
                    "ctaButtonText": "Connect",
                    "ctaButtonLink": "#footer",
                    "backgroundImage": { "fields": { "file": { "url": "https://cdn/bg.png" } } }
                }
            }]
        }));
        let hero = HeroContent::from_entry(&resp.items[0], &resp.includes).expect("hero");
        assert_eq!(hero.button_text, "Connect");
        assert_eq!(hero.background_image.as_deref(), Some("https://cdn/bg.png"));
    }

    #[test]
    fn about_splits_paragraphs_and_drops_dangling_link() {
        let resp = response(json!({
            "items": [{
                "sys": { "id": "ab" },
                "fields": {
                    "title": "About",
                    "content": "First line\ncontinues.\n\nSecond.\n\n",
                    "image": { "sys": { "id": "missing" } }
                }
            }]
        }));
        let about = AboutContent::from_entry(&resp.items[0], &resp.includes).expect("about");
        assert_eq!(about.paragraphs, vec!["First line continues.", "Second."]);
        assert_eq!(about.image, None);
    }

    #[test]
    fn paragraphs_of_empty_text() {
        assert!(split_paragraphs("  \n\n ").is_empty());
    }
}
