use serde::{Serialize, Deserialize};
use log::info;

use crate::device::{Display, InputSource, Peripherals, Transport};
use crate::game::entities::{House, PlayerState};
use crate::game::systems::{input_step, receive_step, render_step};
use crate::game::types::{GameState, Position, Step};

/// Last opponent position drawn on the local matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDisplayCache {
    pub prev: Position,
}

impl RemoteDisplayCache {
    /// Moves the opponent's point: the cached pixel goes off, `next` goes on.
    pub fn redraw(&mut self, next: Position, display: &mut impl Display) {
        display.draw_point(self.prev, false);
        self.prev = next;
        display.draw_point(self.prev, true);
    }
}

/// Everything one device knows about the duel.
///
/// The three periodic steps all go through [`GameSession::on_tick`]; nothing
/// else changes `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) state: GameState,
    pub(crate) reset_requested: bool,
    pub(crate) player: PlayerState,
    pub(crate) remote: RemoteDisplayCache,
    #[serde(skip)]
    pub(crate) house: House,
    pub(crate) title_shown: bool,
    pub(crate) arena_drawn: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one scheduled step against the device's peripherals.
    pub fn on_tick<D, I, T>(&mut self, step: Step, io: &mut Peripherals<D, I, T>)
    where
        D: Display,
        I: InputSource,
        T: Transport,
    {
        match step {
            Step::Render => render_step(self, &mut io.display),
            Step::Receive => receive_step(self, &mut io.transport, &mut io.display),
            Step::Input => input_step(self, &mut io.input, &mut io.transport, &mut io.display),
        }
    }

    pub(crate) fn transition(&mut self, next: GameState) {
        info!("[Controller] {} -> {}", self.state, next);
        self.state = next;
        if next == GameState::Over {
            // Next round redraws player and house even if no OVER render ran.
            self.arena_drawn = false;
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Set on every OVER render and on Select while OVER. Never cleared here.
    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn remote(&self) -> &RemoteDisplayCache {
        &self.remote
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn arena_drawn(&self) -> bool {
        self.arena_drawn
    }
}
