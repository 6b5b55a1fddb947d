use anyhow::Context;
use clap::Parser;

use tuido::cli::Cli;
use tuido::config::Config;
use tuido::store::Store;
use tuido::todo::{TodoReducer, TodoState};
use tuido::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let filter = cli
        .filter
        .map(Into::into)
        .unwrap_or(config.defaults.filter);
    let store = Store::<TodoReducer>::with_state(TodoState {
        todos: Vec::new(),
        filter,
    });

    ui::run(store, &config).context("running ui")?;
    Ok(())
}
