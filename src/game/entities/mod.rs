//! Game entities module.
//!
//! This module organizes the local player and house entity logic.

pub mod player;
pub mod house;

pub use player::*;
pub use house::*;
