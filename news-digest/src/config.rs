//! Loading of `sources.yml`.
//!
//! Two shapes are accepted. The single-topic shape lists `iran_news_sources`
//! and an optional `keywords` list and renders one flat section. Adding
//! `world_news_sources` (with its own `keywords_world`) switches to two headed
//! sections, with the first list read from `keywords_iran` or `keywords`.

use crate::collector::DEFAULT_MAX_ENTRIES_PER_SOURCE;
use crate::types::{DigestError, FeedSource, Result, TopicGroup};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "iran",
    "tehran",
    "irgc",
    "islamic republic",
    "protest",
    "human rights",
];
pub const DEFAULT_MAX_ITEMS: usize = 25;
pub const DEFAULT_SOURCE_NAME: &str = "Source";
pub const IRAN_LABEL: &str = "🇮🇷 Iran";
pub const WORLD_LABEL: &str = "🌍 World";

#[derive(Debug, Deserialize)]
struct RawConfig {
    iran_news_sources: Option<Vec<RawSource>>,
    keywords: Option<Vec<String>>,
    keywords_iran: Option<Vec<String>>,
    world_news_sources: Option<Vec<RawSource>>,
    keywords_world: Option<Vec<String>>,
    max_items: Option<usize>,
    max_entries_per_source: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
    url: Option<String>,
}

/// Everything one run needs, resolved from the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct DigestConfig {
    pub groups: Vec<TopicGroup>,
    /// Whether each group renders under its own heading.
    pub sectioned: bool,
    pub max_items: usize,
    pub max_entries_per_source: usize,
}

impl DigestConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DigestError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;
        debug!("Loaded configuration from {} ({} bytes)", path.display(), text.len());
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(DigestError::MissingKey {
                key: "iran_news_sources",
            });
        }

        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        match value {
            serde_yaml::Value::Null => {
                return Err(DigestError::MissingKey {
                    key: "iran_news_sources",
                })
            }
            serde_yaml::Value::Mapping(_) => {}
            _ => {
                return Err(DigestError::InvalidValue {
                    key: "<root>",
                    reason: "expected a mapping of keys".into(),
                })
            }
        }

        let raw: RawConfig = serde_yaml::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let iran_sources = raw.iran_news_sources.ok_or(DigestError::MissingKey {
            key: "iran_news_sources",
        })?;

        let max_items = positive("max_items", raw.max_items, DEFAULT_MAX_ITEMS)?;
        let max_entries_per_source = positive(
            "max_entries_per_source",
            raw.max_entries_per_source,
            DEFAULT_MAX_ENTRIES_PER_SOURCE,
        )?;

        let iran_keywords = raw
            .keywords_iran
            .or(raw.keywords)
            .map(clean_keywords)
            .unwrap_or_else(|| DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect());

        let mut groups = vec![TopicGroup {
            label: IRAN_LABEL.to_string(),
            sources: resolve_sources(iran_sources),
            keywords: iran_keywords,
        }];

        let sectioned = match raw.world_news_sources {
            Some(world_sources) => {
                let world_keywords = raw.keywords_world.ok_or(DigestError::MissingKey {
                    key: "keywords_world",
                })?;
                groups.push(TopicGroup {
                    label: WORLD_LABEL.to_string(),
                    sources: resolve_sources(world_sources),
                    keywords: clean_keywords(world_keywords),
                });
                true
            }
            None => false,
        };

        Ok(Self {
            groups,
            sectioned,
            max_items,
            max_entries_per_source,
        })
    }
}

fn positive(key: &'static str, value: Option<usize>, default: usize) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(0) => Err(DigestError::InvalidValue {
            key,
            reason: "must be at least 1".into(),
        }),
        Some(n) => Ok(n),
    }
}

// A blank keyword would match every entry.
fn clean_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

fn resolve_sources(raw: Vec<RawSource>) -> Vec<FeedSource> {
    raw.into_iter()
        .filter_map(|source| {
            let name = source
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string());

            match source.url.map(|u| u.trim().to_string()) {
                Some(url) if !url.is_empty() => Some(FeedSource::new(name, url)),
                _ => {
                    warn!("Skipping source {} with no url", name);
                    None
                }
            }
        })
        .collect()
}
