use std::path::PathBuf;

pub use interfaces::defs::{
    DocumentMeta, FeedSource, NewsDocument, NewsItem, NewsSection, RawEntry, TopicGroup,
};

/// Longest summary kept on a `NewsItem`, in characters.
pub const MAX_SUMMARY_CHARS: usize = 280;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("news-digest/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

/// Counters gathered while collecting one topic group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionReport {
    pub sources_attempted: usize,
    pub sources_failed: usize,
    pub entries_seen: usize,
    pub entries_relevant: usize,
    pub empty_links_dropped: usize,
    pub duplicates_dropped: usize,
    pub items_kept: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("invalid configuration YAML: {0}")]
    ConfigSyntax(#[from] serde_yaml::Error),

    #[error("configuration is missing required key `{key}`")]
    MissingKey { key: &'static str },

    #[error("invalid configuration value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme `{scheme}`")]
    UnsupportedScheme { scheme: String },

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
