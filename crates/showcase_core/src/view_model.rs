use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDateTime;
use showcase_logging::{showcase_debug, showcase_info, showcase_warn};

use crate::config::{FilterPolicy, ViewConfig};
use crate::date::{parse_post_date, DatePolicy};
use crate::error::{ConfigError, ViewError};
use crate::post::Post;

/// Label of the "every category" option; parsed case-insensitively.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Most recent first.
    #[default]
    Latest,
    /// Least recent first.
    Oldest,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Latest => "latest",
            SortDirection::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("latest") {
            Ok(SortDirection::Latest)
        } else if raw.eq_ignore_ascii_case("oldest") {
            Ok(SortDirection::Oldest)
        } else {
            Err(ViewError::InvalidSortDirection(raw.to_owned()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// The sentinel wins over a catalog category that happens to be named "all".
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(raw.to_owned())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => post.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// User-adjustable parameters. Only the view-model mutates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    category_filter: CategoryFilter,
    search_query: String,
    /// Lower-cased copy of `search_query`, kept in step by the setter.
    search_needle: String,
    sort_direction: SortDirection,
    reveal_count: usize,
}

impl ViewState {
    fn initial(page_size: usize) -> Self {
        Self {
            category_filter: CategoryFilter::All,
            search_query: String::new(),
            search_needle: String::new(),
            sort_direction: SortDirection::Latest,
            reveal_count: page_size,
        }
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category_filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }
}

/// Derived read of the view-model at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListView<'a> {
    /// `"All"` followed by distinct categories in first-seen order.
    pub category_options: &'a [String],
    pub filtered: Vec<&'a Post>,
    /// Prefix of `filtered` of length `reveal_count`.
    pub visible: Vec<&'a Post>,
    pub has_more: bool,
    pub reveal_count: usize,
    /// Length of the unfiltered source.
    pub total: usize,
}

impl PostListView<'_> {
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Filter/sort/paginate view-model over an immutable post sequence.
#[derive(Debug, Clone)]
pub struct PostListViewModel {
    source: Arc<[Post]>,
    /// Parallel to `source`; `None` sorts before every real instant.
    instants: Vec<Option<NaiveDateTime>>,
    category_options: Vec<String>,
    config: ViewConfig,
    state: ViewState,
    /// Indices into `source`, filtered and sorted for the current state.
    filtered: Vec<usize>,
}

impl PostListViewModel {
    pub fn new(source: Arc<[Post]>, config: ViewConfig) -> Result<Self, ViewError> {
        if config.page_size == 0 {
            return Err(ConfigError::ZeroPageSize.into());
        }

        let mut seen = HashSet::with_capacity(source.len());
        for post in source.iter() {
            if !seen.insert(&post.id) {
                return Err(ConfigError::DuplicatePostId(post.id.clone()).into());
            }
        }

        let instants = parse_instants(&source, config.date_policy)?;
        let category_options = derive_category_options(&source);

        let mut model = Self {
            source,
            instants,
            category_options,
            config,
            state: ViewState::initial(config.page_size),
            filtered: Vec::new(),
        };
        model.recompute();
        showcase_info!(
            "Post list ready: {} posts, {} categories, page size {}",
            model.source.len(),
            model.category_options.len() - 1,
            model.config.page_size
        );
        Ok(model)
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_more(&self) -> bool {
        self.state.reveal_count < self.filtered.len()
    }

    /// Selects a category (or the `"All"` sentinel) and resets the reveal count.
    pub fn set_category_filter(&mut self, raw: &str) -> Result<(), ViewError> {
        let filter = CategoryFilter::parse(raw);
        if let CategoryFilter::Category(name) = &filter {
            let known = self.category_options[1..].iter().any(|option| option == name);
            if !known {
                match self.config.filter_policy {
                    FilterPolicy::Strict => {
                        return Err(ViewError::InvalidFilterValue(name.clone()));
                    }
                    FilterPolicy::Permissive => {
                        showcase_debug!("Category {:?} matches no post", name);
                    }
                }
            }
        }
        self.state.category_filter = filter;
        self.recompute();
        Ok(())
    }

    /// Case-insensitive substring match against title and description.
    /// The text is used verbatim, without trimming.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.state.search_needle = text.to_lowercase();
        self.state.search_query = text;
        self.recompute();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.state.sort_direction = direction;
        self.recompute();
    }

    /// Parses host input; an unknown direction leaves state untouched.
    pub fn set_sort_direction_str(&mut self, raw: &str) -> Result<(), ViewError> {
        let direction = raw.parse()?;
        self.set_sort_direction(direction);
        Ok(())
    }

    /// Grows the reveal count by one page, clamped to the filtered length.
    /// Returns whether anything new became visible.
    pub fn reveal_more(&mut self) -> bool {
        let limit = self.filtered.len();
        let next = self
            .state
            .reveal_count
            .saturating_add(self.config.page_size)
            .min(limit);
        if next == self.state.reveal_count {
            return false;
        }
        showcase_debug!("Reveal {} -> {} of {}", self.state.reveal_count, next, limit);
        self.state.reveal_count = next;
        true
    }

    pub fn view(&self) -> PostListView<'_> {
        let filtered: Vec<&Post> = self.filtered.iter().map(|&i| &self.source[i]).collect();
        let visible = filtered[..self.state.reveal_count].to_vec();
        PostListView {
            category_options: &self.category_options,
            filtered,
            visible,
            has_more: self.has_more(),
            reveal_count: self.state.reveal_count,
            total: self.source.len(),
        }
    }

    fn matches(&self, post: &Post) -> bool {
        if !self.state.category_filter.matches(post) {
            return false;
        }
        let needle = &self.state.search_needle;
        needle.is_empty()
            || post.title.to_lowercase().contains(needle.as_str())
            || post.description.to_lowercase().contains(needle.as_str())
    }

    /// Rebuilds the filtered order and resets the reveal count.
    fn recompute(&mut self) {
        let mut filtered: Vec<usize> = (0..self.source.len())
            .filter(|&i| self.matches(&self.source[i]))
            .collect();
        // `sort_by` is stable, so equal instants keep source order either way.
        let instants = &self.instants;
        match self.state.sort_direction {
            SortDirection::Latest => filtered.sort_by(|&a, &b| instants[b].cmp(&instants[a])),
            SortDirection::Oldest => filtered.sort_by(|&a, &b| instants[a].cmp(&instants[b])),
        }
        self.filtered = filtered;
        self.state.reveal_count = self.config.page_size.min(self.filtered.len());
        showcase_debug!(
            "Filter {:?} / search {:?} / sort {}: {} of {} posts",
            self.state.category_filter.label(),
            self.state.search_query,
            self.state.sort_direction,
            self.filtered.len(),
            self.source.len()
        );
    }
}

fn parse_instants(
    source: &[Post],
    policy: DatePolicy,
) -> Result<Vec<Option<NaiveDateTime>>, ViewError> {
    source
        .iter()
        .map(|post| match parse_post_date(&post.date) {
            Some(instant) => Ok(Some(instant)),
            None => match policy {
                DatePolicy::Reject => Err(ViewError::InvalidDateFormat {
                    id: post.id.clone(),
                    raw: post.date.clone(),
                }),
                DatePolicy::TreatAsMinimum => {
                    showcase_warn!(
                        "Post {} has unparseable date {:?}; sorting it as oldest",
                        post.id,
                        post.date
                    );
                    Ok(None)
                }
            },
        })
        .collect()
}

fn derive_category_options(source: &[Post]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_owned()];
    for category in source.iter().filter_map(|post| post.category.as_deref()) {
        if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            showcase_warn!(
                "Category {:?} is shadowed by the {:?} option and cannot be selected",
                category,
                ALL_CATEGORIES
            );
            continue;
        }
        if !options[1..].iter().any(|known| known == category) {
            options.push(category.to_owned());
        }
    }
    options
}
