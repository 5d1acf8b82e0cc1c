use crate::types::{DocumentMeta, NewsDocument, NewsItem, NewsSection};
use chrono::{DateTime, Utc};

pub const LAYOUT: &str = "news";
pub const EMPTY_PLACEHOLDER: &str = "No matching items found.";
pub const BANNER: &str = "> Auto-generated: headlines + short snippets + source links only.";

/// Metadata for a document generated at `now`.
pub fn document_meta(now: DateTime<Utc>) -> DocumentMeta {
    DocumentMeta {
        title: format!("Auto News – {} UTC", now.format("%Y-%m-%d %H:%M")),
        date: now.format("%Y-%m-%d").to_string(),
        generated_at: now,
    }
}

/// Render a document as Markdown with Jekyll-style front matter.
///
/// A section with no items gets the placeholder line, headed or not.
pub fn render(document: &NewsDocument) -> String {
    let mut lines: Vec<String> = vec![
        "---".into(),
        format!("layout: {}", LAYOUT),
        format!("title: {}", document.meta.title),
        format!("date: {}", document.meta.date),
        "---".into(),
        String::new(),
        BANNER.into(),
        String::new(),
    ];

    for section in &document.sections {
        render_section(section, &mut lines);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_section(section: &NewsSection, lines: &mut Vec<String>) {
    let item_heading = match &section.heading {
        Some(heading) => {
            lines.push(format!("## {}", heading));
            lines.push(String::new());
            "###"
        }
        None => "##",
    };

    if section.items.is_empty() {
        lines.push(EMPTY_PLACEHOLDER.into());
        lines.push(String::new());
        return;
    }

    for item in &section.items {
        render_item(item, item_heading, lines);
    }
}

fn render_item(item: &NewsItem, heading: &str, lines: &mut Vec<String>) {
    lines.push(format!("{} {}", heading, item.title));
    lines.push(format!("**Source:** {}", item.source));
    lines.push(String::new());
    if !item.summary.is_empty() {
        lines.push(item.summary.clone());
        lines.push(String::new());
    }
    lines.push(format!("[Open source link]({})", item.link));
    lines.push(String::new());
    lines.push("---".into());
    lines.push(String::new());
}
