// Demo module for the game. Provides the scheduler, the simulated handheld,
// the random opponent, stdin commands and the terminal duel loop.
pub mod board;
pub mod bot;
pub mod command;
pub mod game_loop;
pub mod render;
pub mod scheduler;

pub use board::Device;
pub use bot::Bot;
pub use command::{Command, CommandError};
pub use game_loop::{run_duel, Duel};
pub use scheduler::{Scheduler, TaskRates};
