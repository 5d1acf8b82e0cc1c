mod common;

use common::{entry, init_tracing, StaticReader};
use news_digest::collector::{dedupe_and_cap, relevant_item, FeedCollector};
use news_digest::{CollectionReport, FeedSource, KeywordSet, NewsItem, RawEntry, MAX_SUMMARY_CHARS};
use std::sync::Arc;

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn item(link: &str) -> NewsItem {
    NewsItem {
        source: "S".into(),
        title: format!("title {}", link),
        summary: String::new(),
        link: link.into(),
    }
}

#[tokio::test]
async fn test_two_sources_keep_source_order_and_drop_irrelevant() {
    init_tracing();

    let reader = StaticReader::new()
        .with_feed(
            "https://one.test/rss",
            vec![
                entry("Iran talks resume", "Diplomats met", "https://one.test/1"),
                entry("Weather", "Sunny all week", "https://one.test/2"),
                entry("Update", "Protest in iran capital", "https://one.test/3"),
            ],
        )
        .with_feed(
            "https://two.test/rss",
            vec![
                entry("IRAN sanctions", "", "https://two.test/1"),
                entry("Markets", "Oil moves on Iran news", "https://two.test/2"),
            ],
        );

    let sources = vec![
        FeedSource::new("One", "https://one.test/rss"),
        FeedSource::new("Two", "https://two.test/rss"),
    ];

    let collector = FeedCollector::new(Arc::new(reader));
    let items = collector.collect(&sources, &keywords(&["iran"]), 10).await;

    let links: Vec<&str> = items.iter().map(|i| i.link.as_str()).collect();
    assert_eq!(
        links,
        vec![
            "https://one.test/1",
            "https://one.test/3",
            "https://two.test/1",
            "https://two.test/2",
        ]
    );
    assert_eq!(items[0].source, "One");
    assert_eq!(items[2].source, "Two");
}

#[tokio::test]
async fn test_duplicate_links_keep_first_seen_across_sources() {
    init_tracing();

    let reader = StaticReader::new()
        .with_feed(
            "https://a.test/rss",
            vec![entry("Iran first", "from a", "https://shared.test/story")],
        )
        .with_feed(
            "https://b.test/rss",
            vec![
                entry("Iran second", "from b", "https://shared.test/story"),
                entry("Iran other", "from b", "https://b.test/other"),
            ],
        );

    let sources = vec![
        FeedSource::new("A", "https://a.test/rss"),
        FeedSource::new("B", "https://b.test/rss"),
    ];

    let (items, report) = FeedCollector::new(Arc::new(reader))
        .collect_with_report(&sources, &keywords(&["iran"]), 10)
        .await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Iran first");
    assert_eq!(items[0].source, "A");
    assert_eq!(items[1].link, "https://b.test/other");
    assert_eq!(report.duplicates_dropped, 1);
}

#[tokio::test]
async fn test_cap_and_per_source_limit() {
    init_tracing();

    let many: Vec<RawEntry> = (0..80)
        .map(|i| entry(&format!("Iran story {}", i), "", &format!("https://big.test/{}", i)))
        .collect();
    let reader = StaticReader::new().with_feed("https://big.test/rss", many);
    let sources = vec![FeedSource::new("Big", "https://big.test/rss")];
    let reader = Arc::new(reader);

    let (items, report) = FeedCollector::new(reader.clone())
        .collect_with_report(&sources, &keywords(&["iran"]), 1000)
        .await;
    assert_eq!(report.entries_seen, 50);
    assert_eq!(items.len(), 50);

    let capped = FeedCollector::new(reader.clone())
        .with_max_entries_per_source(40)
        .collect(&sources, &keywords(&["iran"]), 7)
        .await;
    assert_eq!(capped.len(), 7);
    assert_eq!(capped[6].link, "https://big.test/6");
}

#[tokio::test]
async fn test_failed_source_does_not_stop_later_sources() {
    init_tracing();

    let reader = Arc::new(
        StaticReader::new().with_feed("https://ok.test/rss", vec![entry("Iran", "", "https://ok.test/1")]),
    );
    let sources = vec![
        FeedSource::new("Down", "https://down.test/rss"),
        FeedSource::new("Up", "https://ok.test/rss"),
    ];

    let (items, report) = FeedCollector::new(reader.clone())
        .collect_with_report(&sources, &keywords(&["iran"]), 10)
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source, "Up");
    assert_eq!(report.sources_attempted, 2);
    assert_eq!(report.sources_failed, 1);
    assert_eq!(reader.calls(), vec!["https://down.test/rss", "https://ok.test/rss"]);
}

#[tokio::test]
async fn test_empty_links_never_reach_output() {
    init_tracing();

    let reader = StaticReader::new().with_feed(
        "https://x.test/rss",
        vec![
            entry("Iran no link", "", ""),
            entry("Iran blank link", "", "   "),
            RawEntry {
                title: Some("Iran missing link".into()),
                summary: None,
                link: None,
            },
            entry("Iran linked", "", " https://x.test/1 "),
        ],
    );
    let sources = vec![FeedSource::new("X", "https://x.test/rss")];

    let (items, report) = FeedCollector::new(Arc::new(reader))
        .collect_with_report(&sources, &keywords(&["iran"]), 10)
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].link, "https://x.test/1");
    assert_eq!(report.empty_links_dropped, 3);
    assert!(items.iter().all(|i| !i.link.is_empty()));
}

#[tokio::test]
async fn test_empty_keywords_collect_nothing() {
    let reader = StaticReader::new().with_feed("https://x.test/rss", vec![entry("Iran", "", "https://x.test/1")]);
    let sources = vec![FeedSource::new("X", "https://x.test/rss")];

    let items = FeedCollector::new(Arc::new(reader)).collect(&sources, &[], 10).await;
    assert!(items.is_empty());
}

#[test]
fn test_relevant_item_normalizes_and_truncates() {
    let source = FeedSource::new("Wire", "https://wire.test/rss");
    let long_summary = format!("<p>{}</p> iran", "word ".repeat(100));
    let raw = entry("<b>Breaking</b>\n\nnews", &long_summary, "https://wire.test/1");

    let item = relevant_item(&source, &raw, &KeywordSet::new(&["iran"]), true).expect("matches on full summary");

    assert_eq!(item.title, "Breaking news");
    assert_eq!(item.source, "Wire");
    assert!(item.summary.chars().count() <= MAX_SUMMARY_CHARS);
    assert!(item.summary.starts_with("word word"));
    assert!(!item.summary.contains('<'));
}

#[test]
fn test_relevant_item_matches_on_link() {
    let source = FeedSource::new("Wire", "https://wire.test/rss");
    let raw = entry("Untitled", "", "https://wire.test/world/iran-election");

    assert!(relevant_item(&source, &raw, &KeywordSet::new(&["iran"]), true).is_some());
    assert!(relevant_item(&source, &raw, &KeywordSet::new(&["tehran"]), true).is_none());
}

#[test]
fn test_relevant_item_ignores_link_when_disabled() {
    let source = FeedSource::new("World Desk", "https://w.test/rss");
    let raw = entry("Football scores", "Cup final", "https://w.test/world/sport-1");
    let keywords = KeywordSet::new(&["world"]);

    assert!(relevant_item(&source, &raw, &keywords, true).is_some());
    assert!(relevant_item(&source, &raw, &keywords, false).is_none());
}

#[tokio::test]
async fn test_collector_without_link_in_blob() {
    let reader = StaticReader::new().with_feed(
        "https://w.test/rss",
        vec![
            entry("Football scores", "Cup final", "https://w.test/world/sport-1"),
            entry("World leaders meet", "", "https://w.test/politics/1"),
        ],
    );
    let sources = vec![FeedSource::new("World Desk", "https://w.test/rss")];

    let items = FeedCollector::new(Arc::new(reader))
        .with_link_in_blob(false)
        .collect(&sources, &keywords(&["world"]), 10)
        .await;

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["World leaders meet"]);
}

#[test]
fn test_dedupe_and_cap_invariants() {
    let items = vec![item("a"), item("b"), item("a"), item(""), item("c"), item("b")];

    for cap in 0..6 {
        let mut report = CollectionReport::default();
        let out = dedupe_and_cap(items.clone(), cap, &mut report);
        assert!(out.len() <= cap);
        let expected: Vec<&str> = ["a", "b", "c"].into_iter().take(cap).collect();
        let got: Vec<&str> = out.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(got, expected);
        assert_eq!(report.duplicates_dropped, 2);
        assert_eq!(report.empty_links_dropped, 1);
    }
}
