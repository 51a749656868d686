use crate::query::ContentKind;

/// Failure to obtain a response from the content backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (DNS, connection reset, CORS, ...).
    Transport(String),
    /// The backend answered with a non-success status.
    Status { code: u16, body: String },
    /// The body was not a valid entries response.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "content fetch failed: {msg}"),
            FetchError::Status { code, body } if body.is_empty() => {
                write!(f, "content backend returned HTTP {code}")
            }
            FetchError::Status { code, body } => {
                write!(f, "content backend returned HTTP {code}: {body}")
            }
            FetchError::Decode(msg) => write!(f, "content response malformed: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A single entry whose fields don't match the expected content model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub kind: ContentKind,
    pub entry_id: String,
    pub message: String,
}

impl DecodeError {
    pub fn new(kind: ContentKind, entry_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            entry_id: entry_id.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} entry {}: {}",
            self.kind.content_type(),
            self.entry_id,
            self.message
        )
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing required setting {key}"),
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DecodeError, FetchError};
    use crate::query::ContentKind;

    #[test]
    fn status_display_omits_empty_body() {
        let e = FetchError::Status {
            code: 503,
            body: String::new(),
        };
        assert_eq!(e.to_string(), "content backend returned HTTP 503");
    }

    #[test]
    fn decode_error_names_content_type() {
        let e = DecodeError::new(ContentKind::MediaItem, "abc", "missing field `url`");
        assert_eq!(e.to_string(), "mediaItem entry abc: missing field `url`");
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::Missing("PORTFOLIO_CMS_SPACE").to_string(),
            "missing required setting PORTFOLIO_CMS_SPACE"
        );
    }
}
