pub mod types;
pub mod codec;
pub mod state;

pub mod entities;
pub mod systems;
pub mod demo;

pub use types::*;
pub use state::{GameSession, RemoteDisplayCache};
