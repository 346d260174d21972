use showcase_core::{parse_post_date, Post, RevealAffordance, ShowcaseView};

use super::constants::*;

/// Text rendering of one view; `anchor_row` is where the end-of-list anchor
/// landed, if it is mounted at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    pub anchor_row: Option<usize>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

pub fn render(view: &ShowcaseView<'_>) -> Frame {
    let posts = &view.posts;
    let mut lines = Vec::with_capacity(HEADER_ROWS + posts.visible.len() * CARD_ROWS + 1);

    let search = if view.search_query.is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", view.search_query)
    };
    lines.push(format!(
        "Category: {} | Sort: {} | Search: {}",
        view.selected_category, view.sort_direction, search
    ));
    lines.push(format!("Categories: {}", posts.category_options.join(", ")));
    lines.push(format!(
        "Showing {} of {} matching ({} total)",
        posts.visible.len(),
        posts.filtered.len(),
        posts.total
    ));
    lines.push(String::new());

    if posts.is_empty() {
        lines.push(NO_RESULTS_TEXT.to_string());
    }
    for post in &posts.visible {
        push_card(&mut lines, post);
    }

    let anchor_row = match view.affordance {
        RevealAffordance::None => None,
        RevealAffordance::Anchor => {
            lines.push(ANCHOR_TEXT.to_string());
            Some(lines.len() - 1)
        }
        RevealAffordance::LoadMoreButton => {
            lines.push(LOAD_MORE_TEXT.to_string());
            None
        }
    };

    Frame { lines, anchor_row }
}

fn push_card(lines: &mut Vec<String>, post: &Post) {
    let badge = match (&post.category, post.tags.is_empty()) {
        (Some(category), _) => format!("[{category}]"),
        (None, false) => format!("#{}", post.tags.join(" #")),
        (None, true) => String::new(),
    };
    lines.push(format!("{badge} {}", display_date(&post.date)).trim_start().to_string());
    lines.push(post.title.clone());
    lines.push(clamp(&post.description, DESCRIPTION_LIMIT));
    lines.push(match post.primary_link() {
        Some(link) => format!("  -> {}", link.url),
        None => String::new(),
    });
    lines.push(String::new());
}

fn display_date(raw: &str) -> String {
    match parse_post_date(raw) {
        Some(instant) => instant.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn clamp(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
