use std::{process, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;

use school_timer::{
    ScheduleStore, SystemClock,
    app::{self, AppState},
    config::Config,
    logging,
};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    logging::init(config.verbose);

    if let Err(e) = run(config).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let store = ScheduleStore::new();
    let state = AppState::new(store, Arc::new(SystemClock), config.tick_period());

    app::serve(config.addr, state, config.static_dir.clone())
        .await
        .with_context(|| format!("serving on {}", config.addr))
}
