//! Simulated handheld: a session wired to host peripherals.

use log::info;
use serde_json::json;
use uuid::Uuid;

use crate::device::{IrLink, LedMatrix, NavQueue, Peripherals};
use crate::game::demo::scheduler::Scheduler;
use crate::game::state::GameSession;
use crate::game::types::{GameState, NavEvent};

pub type HostPeripherals = Peripherals<LedMatrix, NavQueue, IrLink>;

pub struct Device {
    pub id: Uuid,
    pub name: String,
    pub session: GameSession,
    pub io: HostPeripherals,
}

impl Device {
    pub fn new(name: impl Into<String>, link: IrLink) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            session: GameSession::new(),
            io: Peripherals::new(LedMatrix::new(), NavQueue::new(), link),
        }
    }

    pub fn press(&mut self, event: NavEvent) {
        self.io.input.press(event);
    }

    /// Runs the steps due at `tick`. Returns true if the phase changed.
    pub fn run_due(&mut self, scheduler: &Scheduler, tick: u64) -> bool {
        let before = self.session.state();
        for step in scheduler.due(tick) {
            self.session.on_tick(step, &mut self.io);
        }
        let after = self.session.state();
        if before != after {
            info!("[Duel] device={} ({}) tick={} {} -> {}", self.name, self.id, tick, before, after);
        }
        before != after
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn matrix(&self) -> &LedMatrix {
        &self.io.display
    }

    /// JSON view of the device for the `status` command.
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&json!({
            "id": self.id,
            "name": self.name,
            "session": self.session,
            "banner": self.io.display.text(),
        }))
    }
}
