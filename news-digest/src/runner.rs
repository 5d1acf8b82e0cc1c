use crate::collector::FeedCollector;
use crate::config::DigestConfig;
use crate::render::{document_meta, render};
use crate::traits::FeedReader;
use crate::types::{NewsDocument, NewsSection, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub const CONFIG_FILE_NAME: &str = "sources.yml";
pub const NEWS_DIR_NAME: &str = "news";

/// `auto-YYYY-MM-DD-HHMM.md`, minute precision in UTC.
pub fn output_file_name(now: DateTime<Utc>) -> String {
    format!("auto-{}.md", now.format("%Y-%m-%d-%H%M"))
}

/// One run of the digest job: collect every topic group, render, write.
pub struct Runner {
    config: DigestConfig,
    collector: FeedCollector,
    output_dir: PathBuf,
}

impl Runner {
    pub fn new(config: DigestConfig, reader: Arc<dyn FeedReader>, output_dir: impl Into<PathBuf>) -> Self {
        // Headed groups match on title and summary only; a `/world/` path would match "world".
        let collector = FeedCollector::new(reader)
            .with_max_entries_per_source(config.max_entries_per_source)
            .with_link_in_blob(!config.sectioned);

        Self {
            config,
            collector,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Build the document for a run at `now` without touching the filesystem.
    pub async fn build_document(&self, now: DateTime<Utc>) -> NewsDocument {
        let mut sections = Vec::with_capacity(self.config.groups.len());

        for group in &self.config.groups {
            info!("Collecting topic group {} ({} sources)", group.label, group.sources.len());
            let items = self
                .collector
                .collect(&group.sources, &group.keywords, self.config.max_items)
                .await;

            sections.push(NewsSection {
                heading: self.config.sectioned.then(|| group.label.clone()),
                items,
            });
        }

        NewsDocument {
            meta: document_meta(now),
            sections,
        }
    }

    /// Run at `now` and return the path of the written file.
    ///
    /// An existing file with the same name is overwritten.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<PathBuf> {
        let document = self.build_document(now).await;
        let markdown = render(&document);

        std::fs::create_dir_all(&self.output_dir)?;
        let out = self.output_dir.join(output_file_name(now));
        std::fs::write(&out, markdown)?;

        info!("Wrote {} items to {}", document.item_count(), out.display());
        Ok(out)
    }

    pub async fn run(&self) -> Result<PathBuf> {
        self.run_at(Utc::now()).await
    }
}
