//! Terminal host for the showcase: wires stdin, settings, logging and a
//! simulated viewport to the pure core.
mod app;
mod cli;
mod effects;
mod logging;
mod observer;
mod settings;
mod ui;

use showcase_data::{bundled_posts, load_posts};
use showcase_logging::showcase_info;

pub use cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log);

    let settings = settings::load_settings(&cli.settings);
    let options = cli.resolve(settings);
    showcase_info!("Starting showcase with {:?}", options);

    let posts = match &options.posts {
        Some(path) => load_posts(path)?,
        None => bundled_posts()?,
    };
    app::run_app(posts, &options)
}
