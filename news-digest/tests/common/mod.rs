#![allow(dead_code)]

use async_trait::async_trait;
use news_digest::{DigestError, FeedReader, FeedSource, RawEntry, Result};
use std::collections::HashMap;
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn entry(title: &str, summary: &str, link: &str) -> RawEntry {
    RawEntry {
        title: Some(title.to_string()),
        summary: Some(summary.to_string()),
        link: Some(link.to_string()),
    }
}

/// Serves canned entries keyed by source URL; unknown URLs fail like a dead host.
#[derive(Default)]
pub struct StaticReader {
    feeds: HashMap<String, Vec<RawEntry>>,
    calls: Mutex<Vec<String>>,
}

impl StaticReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, entries: Vec<RawEntry>) -> Self {
        self.feeds.insert(url.to_string(), entries);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedReader for StaticReader {
    async fn read(&self, source: &FeedSource) -> Result<Vec<RawEntry>> {
        self.calls.lock().unwrap().push(source.url.clone());
        self.feeds
            .get(&source.url)
            .cloned()
            .ok_or_else(|| DigestError::HttpStatus {
                status: 503,
                url: source.url.clone(),
            })
    }
}
