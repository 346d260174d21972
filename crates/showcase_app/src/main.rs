mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = platform::Cli::parse();
    platform::run(cli)
}
