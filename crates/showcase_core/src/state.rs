use std::sync::Arc;

use crate::reveal::{RevealAffordance, RevealController, VisibilitySupport};
use crate::view_model::{PostListView, PostListViewModel, SortDirection};
use crate::{Effect, Post, ViewConfig, ViewError};

/// Everything the host keeps between events.
#[derive(Debug, Clone)]
pub struct ShowcaseState {
    pub(crate) posts: PostListViewModel,
    pub(crate) reveal: RevealController,
    dirty: bool,
}

/// What the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseView<'a> {
    pub posts: PostListView<'a>,
    pub affordance: RevealAffordance,
    pub selected_category: &'a str,
    pub search_query: &'a str,
    pub sort_direction: SortDirection,
    pub dirty: bool,
}

impl ShowcaseState {
    /// Builds the state and the effects needed to start watching the anchor.
    pub fn new(
        source: Arc<[Post]>,
        config: ViewConfig,
        support: VisibilitySupport,
    ) -> Result<(Self, Vec<Effect>), ViewError> {
        let posts = PostListViewModel::new(source, config)?;
        let mut reveal = RevealController::new(support);
        let effects = reveal.start(&posts);
        let state = Self {
            posts,
            reveal,
            dirty: true,
        };
        Ok((state, effects))
    }

    pub fn posts(&self) -> &PostListViewModel {
        &self.posts
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn view(&self) -> ShowcaseView<'_> {
        let state = self.posts.state();
        ShowcaseView {
            posts: self.posts.view(),
            affordance: self.reveal.affordance(&self.posts),
            selected_category: state.category_filter().label(),
            search_query: state.search_query(),
            sort_direction: state.sort_direction(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
