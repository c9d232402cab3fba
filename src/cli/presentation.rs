//! CLI presentation: text formatters per command.

use crate::config::ValidationError;
use crate::content::{BlogPostPage, PageOutcome};
use crate::locale::Locale;
use crate::paths::{FallbackPolicy, StaticPaths};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

fn format_section_heading(title: &str) -> String {
    format!("{}\n{}", title, "-".repeat(title.len()))
}

/// Enumerated paths as a table, with per-locale counts.
pub fn format_paths_text(paths: &StaticPaths) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Detail paths")));

    if paths.is_empty() {
        out.push_str("No detail paths enumerated.\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Type", "Locale", "Slug"]);
        for entry in &paths.entries {
            table.add_row(vec![
                entry.content_type.clone(),
                entry.locale.to_string(),
                entry.slug.clone(),
            ]);
        }
        out.push_str(&format!("{}\n\n", table));

        let mut counts: Vec<(&Locale, usize)> = Vec::new();
        for entry in &paths.entries {
            match counts.iter_mut().find(|(l, _)| *l == &entry.locale) {
                Some((_, n)) => *n += 1,
                None => counts.push((&entry.locale, 1)),
            }
        }
        let summary: Vec<String> = counts.iter().map(|(l, n)| format!("{} {}", n, l)).collect();
        out.push_str(&format!("Total: {} ({})\n", paths.len(), summary.join(", ")));
    }

    let fallback = match paths.fallback {
        FallbackPolicy::OnDemand => "unlisted paths are generated on first request",
        FallbackPolicy::Exhaustive => "unlisted paths are not found",
    };
    out.push_str(&format!("Fallback: {}\n", fallback));
    out
}

/// One blog post page, or a not-found line.
pub fn format_post_page_text(outcome: &PageOutcome<BlogPostPage>, slug: &str) -> String {
    let page = match outcome {
        PageOutcome::Found(page) => page,
        PageOutcome::NotFound => return format!("Post '{}' not found.\n", slug),
    };
    let post = &page.post;

    let mut out = String::new();
    let title = post.title.as_deref().unwrap_or("(untitled)");
    out.push_str(&format!("{}\n\n", format_section_heading(title)));
    out.push_str(&format!("  Slug: {}\n", post.slug.as_deref().unwrap_or(slug)));
    if let Some(date) = post.date {
        out.push_str(&format!("  Date: {}\n", date));
    }
    if let Some(name) = post.author.as_ref().and_then(|a| a.name.as_deref()) {
        out.push_str(&format!("  Author: {}\n", name));
    }
    let tags: Vec<&str> = post.tags.iter().filter_map(|t| t.name.as_deref()).collect();
    if !tags.is_empty() {
        out.push_str(&format!("  Tags: {}\n", tags.join(", ")));
    }
    if let Some(ref excerpt) = post.excerpt {
        out.push_str(&format!("\n{}\n", excerpt));
    }

    out.push('\n');
    if page.last_posts.is_empty() {
        out.push_str("No related posts.\n");
    } else {
        out.push_str(&format!("{}\n\n", format_section_heading("Related posts")));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Slug", "Title", "Date"]);
        for related in &page.last_posts {
            table.add_row(vec![
                related.slug.clone().unwrap_or_else(|| "-".to_string()),
                related.title.clone().unwrap_or_else(|| "-".to_string()),
                related
                    .date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}

pub fn format_validation_text(result: &Result<(), Vec<ValidationError>>) -> String {
    match result {
        Ok(()) => "Configuration is valid.\n".to_string(),
        Err(errors) => {
            let mut out = format!("Configuration has {} problem(s):\n", errors.len());
            for error in errors {
                out.push_str(&format!("  - {}\n", error));
            }
            out
        }
    }
}
