//=========================================================================
// perfect-maze
//
// Opens the maze window with default settings.
//
// Environment:
// - `RUST_LOG`  log filter (default: info)
// - `MAZE_SEED` optional u64 seed for reproducible mazes
//
//=========================================================================

use log::{error, warn};
use perfect_maze::GameBuilder;

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var("MAZE_SEED").ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!("Ignoring MAZE_SEED={:?}: {}", raw, e);
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = GameBuilder::new();
    if let Some(seed) = seed_from_env() {
        builder = builder.with_seed(seed);
    }

    if let Err(e) = builder.build().run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
