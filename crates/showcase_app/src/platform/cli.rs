use std::path::PathBuf;

use clap::Parser;
use showcase_core::{DatePolicy, FilterPolicy, ViewConfig, VisibilitySupport};

use super::logging::LogDestination;
use super::settings::{Settings, VisibilityMode, SETTINGS_FILENAME};

/// Browse a post catalog in the terminal: filter, search, sort and scroll.
#[derive(Debug, Parser)]
#[command(name = "showcase", version)]
pub struct Cli {
    /// JSON post catalog; the bundled catalog is used when omitted.
    #[arg(long, value_name = "FILE")]
    pub posts: Option<PathBuf>,

    /// RON settings file.
    #[arg(long, value_name = "FILE", default_value = SETTINGS_FILENAME)]
    pub settings: PathBuf,

    /// Posts revealed per page (overrides settings).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Disable the scroll-driven anchor and use the "more" command only.
    #[arg(long)]
    pub manual: bool,

    /// Reject categories that no post carries.
    #[arg(long)]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

/// Settings and flags merged into what the host needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    pub posts: Option<PathBuf>,
    pub view: ViewConfig,
    pub support: VisibilitySupport,
    pub viewport_rows: usize,
}

impl Cli {
    /// Flags win over the settings file.
    pub fn resolve(&self, settings: Settings) -> AppOptions {
        let filter_policy = if self.strict || settings.strict_filters {
            FilterPolicy::Strict
        } else {
            FilterPolicy::Permissive
        };
        let date_policy = if settings.reject_bad_dates {
            DatePolicy::Reject
        } else {
            DatePolicy::TreatAsMinimum
        };
        let visibility = if self.manual {
            VisibilityMode::Manual
        } else {
            settings.visibility
        };
        let view = ViewConfig::new(self.page_size.unwrap_or(settings.page_size))
            .with_filter_policy(filter_policy)
            .with_date_policy(date_policy);

        AppOptions {
            posts: self.posts.clone(),
            view,
            support: visibility.into(),
            viewport_rows: settings.viewport_rows.max(1),
        }
    }
}
