//! Random opponent for the terminal demo.

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::demo::board::Device;
use crate::game::types::{GameState, NavEvent};

/// Presses Select outside a round and a random direction inside one, once
/// every `period` base ticks.
pub struct Bot<R: Rng> {
    rng: R,
    period: u64,
}

impl<R: Rng> Bot<R> {
    pub fn new(rng: R, period: u64) -> Self {
        Self { rng, period: period.max(1) }
    }

    pub fn choose(&mut self, state: GameState) -> Option<NavEvent> {
        match state {
            GameState::Playing => NavEvent::DIRECTIONS.iter().copied().choose(&mut self.rng),
            GameState::Init | GameState::Over => Some(NavEvent::Select),
        }
    }

    pub fn act(&mut self, device: &mut Device, tick: u64) {
        if tick % self.period != 0 {
            return;
        }
        if let Some(event) = self.choose(device.state()) {
            device.press(event);
        }
    }
}
