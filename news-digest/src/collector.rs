use crate::classifier::KeywordSet;
use crate::normalize::{clean_field, truncate_chars};
use crate::traits::FeedReader;
use crate::types::{CollectionReport, FeedSource, NewsItem, RawEntry, MAX_SUMMARY_CHARS};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Raw entries taken from the head of each feed before any filtering.
pub const DEFAULT_MAX_ENTRIES_PER_SOURCE: usize = 50;

/// Fetches sources in order, keeps keyword-relevant entries, and dedupes them by link.
pub struct FeedCollector {
    reader: Arc<dyn FeedReader>,
    max_entries_per_source: usize,
    link_in_blob: bool,
}

impl FeedCollector {
    pub fn new(reader: Arc<dyn FeedReader>) -> Self {
        Self {
            reader,
            max_entries_per_source: DEFAULT_MAX_ENTRIES_PER_SOURCE,
            link_in_blob: true,
        }
    }

    pub fn with_max_entries_per_source(mut self, max_entries: usize) -> Self {
        self.max_entries_per_source = max_entries;
        self
    }

    /// Whether the link takes part in keyword matching alongside title and summary.
    pub fn with_link_in_blob(mut self, link_in_blob: bool) -> Self {
        self.link_in_blob = link_in_blob;
        self
    }

    /// Collect at most `cap` relevant items across `sources`, first-seen link wins.
    pub async fn collect(
        &self,
        sources: &[FeedSource],
        keywords: &[String],
        cap: usize,
    ) -> Vec<NewsItem> {
        self.collect_with_report(sources, keywords, cap).await.0
    }

    pub async fn collect_with_report(
        &self,
        sources: &[FeedSource],
        keywords: &[String],
        cap: usize,
    ) -> (Vec<NewsItem>, CollectionReport) {
        let keyword_set = KeywordSet::new(keywords);
        let mut report = CollectionReport::default();
        let mut relevant = Vec::new();

        if keyword_set.is_empty() {
            warn!("No keywords configured; nothing can match");
        }

        for source in sources {
            report.sources_attempted += 1;

            // A failing source contributes nothing; later sources still run.
            let entries = match self.reader.read(source).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Failed to read source {} ({}): {}", source.name, source.url, e);
                    report.sources_failed += 1;
                    continue;
                }
            };

            let before = relevant.len();
            for entry in entries.iter().take(self.max_entries_per_source) {
                report.entries_seen += 1;
                if let Some(item) = relevant_item(source, entry, &keyword_set, self.link_in_blob) {
                    relevant.push(item);
                }
            }

            info!(
                "Source {}: {} entries, {} relevant",
                source.name,
                entries.len().min(self.max_entries_per_source),
                relevant.len() - before
            );
        }

        report.entries_relevant = relevant.len();
        let items = dedupe_and_cap(relevant, cap, &mut report);
        report.items_kept = items.len();

        info!(
            "Collected {} items from {} sources ({} failed, {} relevant, {} duplicates, {} without link)",
            report.items_kept,
            report.sources_attempted,
            report.sources_failed,
            report.entries_relevant,
            report.duplicates_dropped,
            report.empty_links_dropped
        );

        (items, report)
    }
}

/// Normalize one raw entry and return it as an item if it matches `keywords`.
///
/// The match runs over title and full cleaned summary, plus the link when
/// `link_in_blob` is set; the stored summary is truncated afterwards.
pub fn relevant_item(
    source: &FeedSource,
    entry: &RawEntry,
    keywords: &KeywordSet,
    link_in_blob: bool,
) -> Option<NewsItem> {
    let title = clean_field(entry.title.as_deref());
    let summary = clean_field(entry.summary.as_deref());
    let link = entry.link.as_deref().unwrap_or_default().trim().to_string();

    let blob = if link_in_blob {
        format!("{} {} {}", title, summary, link)
    } else {
        format!("{} {}", title, summary)
    };
    if !keywords.is_relevant(&blob) {
        debug!("Skipping irrelevant entry from {}: {}", source.name, title);
        return None;
    }

    Some(NewsItem {
        source: source.name.clone(),
        title,
        summary: truncate_chars(&summary, MAX_SUMMARY_CHARS),
        link,
    })
}

/// Drop link-less items, keep the first item per link, then keep the first `cap`.
pub fn dedupe_and_cap(items: Vec<NewsItem>, cap: usize, report: &mut CollectionReport) -> Vec<NewsItem> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        if item.link.is_empty() {
            report.empty_links_dropped += 1;
            continue;
        }
        if !seen.insert(item.link.clone()) {
            debug!("Removing duplicate entry: {} ({})", item.title, item.link);
            report.duplicates_dropped += 1;
            continue;
        }
        unique.push(item);
    }

    unique.truncate(cap);
    unique
}
