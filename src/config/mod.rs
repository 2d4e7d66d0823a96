/// Main configuration module.
///
/// Re-exports submodules for game and scheduler configuration.
pub mod game;
pub mod tasks;
