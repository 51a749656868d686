use content::{Category, ContentRecord};
use serde::{Deserialize, Serialize};

/// The active filter chip.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterKey {
    #[default]
    All,
    Featured,
    Category(Category),
}

impl FilterKey {
    pub fn matches(self, record: &ContentRecord) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Featured => record.featured,
            FilterKey::Category(category) => record.category == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::Featured => "featured",
            FilterKey::Category(category) => category.as_str(),
        }
    }

    /// Chip text.
    pub fn label(self) -> &'static str {
        match self {
            FilterKey::All => "All",
            FilterKey::Featured => "Featured",
            FilterKey::Category(category) => category.label(),
        }
    }
}

impl From<Category> for FilterKey {
    fn from(category: Category) -> Self {
        FilterKey::Category(category)
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(FilterKey::All),
            "featured" => Ok(FilterKey::Featured),
            _ => s.parse::<Category>().map(FilterKey::Category),
        }
    }
}

impl TryFrom<String> for FilterKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterKey> for String {
    fn from(key: FilterKey) -> Self {
        key.as_str().to_string()
    }
}

/// Records passing `key`, in input order.
pub fn filter_records(records: &[ContentRecord], key: FilterKey) -> Vec<&ContentRecord> {
    records.iter().filter(|r| key.matches(r)).collect()
}
