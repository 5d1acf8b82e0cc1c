pub mod defs;

pub use defs::{DocumentMeta, FeedSource, NewsDocument, NewsItem, NewsSection, RawEntry, TopicGroup};
