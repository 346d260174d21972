//! Showcase core: post list view-model, reveal controller and the pure
//! update function that funnels host events into them.
mod config;
mod date;
mod effect;
mod error;
mod msg;
mod post;
mod reveal;
mod state;
mod update;
mod view_model;

pub use config::{FilterPolicy, ViewConfig, DEFAULT_PAGE_SIZE};
pub use date::{parse_post_date, DatePolicy};
pub use effect::Effect;
pub use error::{ConfigError, ViewError};
pub use msg::Msg;
pub use post::{Post, PostId, PostLink};
pub use reveal::{RevealAffordance, RevealController, VisibilitySupport};
pub use state::{ShowcaseState, ShowcaseView};
pub use update::update;
pub use view_model::{
    CategoryFilter, PostListView, PostListViewModel, SortDirection, ViewState, ALL_CATEGORIES,
};
