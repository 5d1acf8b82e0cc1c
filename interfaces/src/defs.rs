use chrono::{DateTime, Utc};

/// One syndicated feed endpoint and its human-readable label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A feed entry as it came off the wire. Every field may be missing or carry markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
}

/// A cleaned, relevant entry ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsItem {
    pub source: String,
    pub title: String,
    pub summary: String,
    pub link: String,
}

/// Sources and the keyword set that decides relevance for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicGroup {
    pub label: String,
    pub sources: Vec<FeedSource>,
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsSection {
    pub heading: Option<String>,
    pub items: Vec<NewsItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub date: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsDocument {
    pub meta: DocumentMeta,
    pub sections: Vec<NewsSection>,
}

impl NewsDocument {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

// Object style note:
// Everything here is a value created fresh for one run of the digest job
// and dropped when the process exits. Nothing is mutated after creation
// except while items accumulate during collection.
