pub mod types;
pub mod normalize;
pub mod classifier;
pub mod fetcher;
pub mod parser;
pub mod traits;
pub mod collector;
pub mod render;
pub mod config;
pub mod runner;

pub use types::*;
pub use classifier::{matches, KeywordSet};
pub use collector::FeedCollector;
pub use config::DigestConfig;
pub use fetcher::Fetcher;
pub use normalize::clean;
pub use parser::FeedParser;
pub use render::render;
pub use runner::{output_file_name, Runner};
pub use traits::{FeedReader, HttpFeedReader};
