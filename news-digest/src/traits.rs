use crate::fetcher::Fetcher;
use crate::parser::FeedParser;
use crate::types::{FeedSource, FetchConfig, RawEntry, Result};
use async_trait::async_trait;

/// Something that can turn a configured source into its raw entries.
#[async_trait]
pub trait FeedReader: Send + Sync {
    /// Fetch and parse one source. Entries come back in feed order.
    async fn read(&self, source: &FeedSource) -> Result<Vec<RawEntry>>;
}

/// Reads feeds over HTTP(S) and parses them with feed-rs.
pub struct HttpFeedReader {
    fetcher: Fetcher,
}

impl HttpFeedReader {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }
}

#[async_trait]
impl FeedReader for HttpFeedReader {
    async fn read(&self, source: &FeedSource) -> Result<Vec<RawEntry>> {
        let content = self.fetcher.fetch_feed(&source.url).await?;
        FeedParser::parse_feed(&content)
    }
}
