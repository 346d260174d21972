use crate::date::DatePolicy;

/// Number of posts revealed per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// How `set_category_filter` treats a category no post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    /// Accept it; the filtered sequence is simply empty.
    #[default]
    Permissive,
    /// Reject it with `InvalidFilterValue`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub page_size: usize,
    pub filter_policy: FilterPolicy,
    pub date_policy: DatePolicy,
}

impl ViewConfig {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn with_filter_policy(mut self, policy: FilterPolicy) -> Self {
        self.filter_policy = policy;
        self
    }

    pub fn with_date_policy(mut self, policy: DatePolicy) -> Self {
        self.date_policy = policy;
        self
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            filter_policy: FilterPolicy::default(),
            date_policy: DatePolicy::default(),
        }
    }
}
