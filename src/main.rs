//! Main entry point for the terminal duel.
//!
//! Initializes logging and runs two simulated handhelds linked over an
//! in-process infrared pair, the local one steered from stdin.

use house_duel::game::demo::{run_duel, TaskRates};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_duel(TaskRates::default()).await
}
