//! Game-logic core of HOUSE, a two-player infrared duel on 5x7 LED handhelds.
//!
//! Each device shows its own player, its own house and the opponent's
//! position as received over a one-byte infrared link. A device whose house
//! is destroyed sends the win signal and both sides return to the title.
//!
//! - `game`: session state machine, player and house entities, the
//!   coordinate codec and the three periodic steps
//! - `device`: display, input and transport traits plus host stand-ins
//! - `config`: compile-time game and scheduler constants
//! - `game::demo`: scheduler, simulated devices and the terminal duel

pub mod config;
pub mod device;
pub mod game;
