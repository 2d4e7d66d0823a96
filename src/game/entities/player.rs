//! Local player entity.
//!
//! The player is a single lit pixel. Moves that would land exactly on one of
//! the configured extremes are dropped without any signal to the caller.

use serde::{Serialize, Deserialize};
use log::trace;

use crate::config::game::{MAX_X, MAX_Y, MIN_X, MIN_Y, START_X, START_Y};
use crate::device::Display;
use crate::game::types::{MoveOutcome, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pos: Position,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub const START: Position = Position::new(START_X, START_Y);

    pub fn new() -> Self {
        Self { pos: Self::START }
    }

    /// Places the player on the start tile and draws it.
    pub fn init(&mut self, display: &mut impl Display) {
        self.pos = Self::START;
        display.draw_point(self.pos, true);
    }

    /// Where a move by `(dx, dy)` would end up, without applying it.
    pub fn check_move(&self, dx: i8, dy: i8) -> MoveOutcome {
        let next = self.pos.offset(dx, dy);
        if next.x == MAX_X || next.x == MIN_X || next.y == MAX_Y || next.y == MIN_Y {
            return MoveOutcome::Rejected;
        }
        MoveOutcome::Moved(next)
    }

    /// Moves the player and redraws it. Rejected moves leave both the
    /// position and the display untouched.
    pub fn step(&mut self, dx: i8, dy: i8, display: &mut impl Display) -> MoveOutcome {
        let outcome = self.check_move(dx, dy);
        match outcome {
            MoveOutcome::Moved(next) => {
                display.draw_point(self.pos, false);
                self.pos = next;
                display.draw_point(self.pos, true);
                display.refresh();
            }
            MoveOutcome::Rejected => {
                trace!("[Player] move ({}, {}) from {} dropped", dx, dy, self.pos);
            }
        }
        outcome
    }

    /// Erases the player and puts it back on the start tile.
    pub fn reset(&mut self, display: &mut impl Display) {
        display.draw_point(self.pos, false);
        self.pos = Self::START;
        display.draw_point(self.pos, true);
    }

    pub fn x(&self) -> i8 {
        self.pos.x
    }

    pub fn y(&self) -> i8 {
        self.pos.y
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    #[cfg(test)]
    pub(crate) fn at(pos: Position) -> Self {
        Self { pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::LedMatrix;
    use proptest::prelude::*;

    #[test]
    fn test_init_draws_start_tile() {
        let mut matrix = LedMatrix::new();
        let mut player = PlayerState::new();
        player.init(&mut matrix);
        assert_eq!(player.position(), Position::new(2, 3));
        assert!(matrix.pixel(Position::new(2, 3)));
    }

    #[test]
    fn test_step_moves_pixel_and_refreshes() {
        let mut matrix = LedMatrix::new();
        let mut player = PlayerState::new();
        player.init(&mut matrix);

        let outcome = player.step(0, 1, &mut matrix);

        assert_eq!(outcome, MoveOutcome::Moved(Position::new(2, 4)));
        assert!(!matrix.pixel(Position::new(2, 3)));
        assert!(matrix.pixel(Position::new(2, 4)));
        assert_eq!(matrix.refreshes(), 1);
    }

    #[test]
    fn test_step_onto_extreme_is_rejected() {
        let mut matrix = LedMatrix::new();
        let mut player = PlayerState::at(Position::new(4, 6));

        assert_eq!(player.step(1, 0, &mut matrix), MoveOutcome::Rejected);
        assert_eq!(player.step(0, 1, &mut matrix), MoveOutcome::Rejected);
        assert_eq!(player.position(), Position::new(4, 6));
        assert_eq!(matrix.refreshes(), 0);
    }

    #[test]
    fn test_step_may_reach_one_inside_extreme() {
        let mut matrix = LedMatrix::new();
        let mut player = PlayerState::at(Position::new(-3, 0));
        assert_eq!(player.step(-1, 0, &mut matrix), MoveOutcome::Moved(Position::new(-4, 0)));
        assert_eq!(player.step(-1, 0, &mut matrix), MoveOutcome::Rejected);
        assert_eq!(player.step(0, -1, &mut matrix), MoveOutcome::Rejected);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut matrix = LedMatrix::new();
        let mut player = PlayerState::new();
        player.init(&mut matrix);
        player.step(1, 0, &mut matrix);

        player.reset(&mut matrix);

        assert_eq!(player.position(), PlayerState::START);
        assert!(!matrix.pixel(Position::new(3, 3)));
        assert!(matrix.pixel(PlayerState::START));
    }

    proptest! {
        #[test]
        fn prop_moves_onto_extremes_leave_position(
            x in (MIN_X + 1)..MAX_X,
            y in (MIN_Y + 1)..MAX_Y,
            dx in -2i8..=2,
            dy in -2i8..=2,
        ) {
            let mut matrix = LedMatrix::new();
            let mut player = PlayerState::at(Position::new(x, y));
            let (nx, ny) = (x + dx, y + dy);
            let outcome = player.step(dx, dy, &mut matrix);
            if nx == MAX_X || nx == MIN_X || ny == MAX_Y || ny == MIN_Y {
                prop_assert_eq!(outcome, MoveOutcome::Rejected);
                prop_assert_eq!(player.position(), Position::new(x, y));
            } else {
                prop_assert_eq!(player.position(), Position::new(nx, ny));
            }
        }
    }
}
