//! House entity logic.
//!
//! The house is a 3x3 block of pixels. It owns no state: intactness is read
//! back from the display, so anything that switches a house pixel off (the
//! opponent's point being erased, the local player walking through) damages it.

use crate::config::game::{
    HOUSE_BOTTOM_RIGHT_X, HOUSE_BOTTOM_RIGHT_Y, HOUSE_DESTROYED_OFF, HOUSE_ROW_LEN,
    HOUSE_TILES, HOUSE_TOP_LEFT_X, HOUSE_TOP_LEFT_Y,
};
use crate::device::Display;
use crate::game::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct House {
    top_left: Position,
    bottom_right: Position,
}

impl Default for House {
    fn default() -> Self {
        Self::new()
    }
}

impl House {
    pub const fn new() -> Self {
        Self {
            top_left: Position::new(HOUSE_TOP_LEFT_X, HOUSE_TOP_LEFT_Y),
            bottom_right: Position::new(HOUSE_BOTTOM_RIGHT_X, HOUSE_BOTTOM_RIGHT_Y),
        }
    }

    /// Draws the full block.
    pub fn init(&self, display: &mut impl Display) {
        display.draw_box(self.top_left, self.bottom_right, true);
    }

    /// Tile positions, row by row, each row starting at the anchor column.
    pub fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        let step: i8 = if self.bottom_right.x < self.top_left.x { -1 } else { 1 };
        (0..HOUSE_TILES).map(move |i| {
            let col = (i % HOUSE_ROW_LEN) as i8;
            let row = (i / HOUSE_ROW_LEN) as i8;
            Position::new(self.top_left.x + col * step, self.top_left.y + row)
        })
    }

    pub fn tiles_off(&self, display: &impl Display) -> usize {
        self.tiles().filter(|tile| !display.pixel(*tile)).count()
    }

    /// False only when exactly eight of the nine tiles are off.
    ///
    /// A house with all nine tiles off still reports intact. The threshold is
    /// kept as the handheld firmware defines it.
    pub fn is_intact(&self, display: &impl Display) -> bool {
        self.tiles_off(display) != HOUSE_DESTROYED_OFF
    }
}
