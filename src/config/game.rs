/// Game configuration constants.
///
/// This module defines the LED matrix geometry, the player movement bounds,
/// the house anchor and the infrared coordinate codec parameters.
pub const DISPLAY_WIDTH: i8 = 5; // Columns of the LED matrix.

/// Rows of the LED matrix.
pub const DISPLAY_HEIGHT: i8 = 7;

/// Player x values that a move may never land on.
pub const MAX_X: i8 = 5;
pub const MIN_X: i8 = -5;

/// Player y values that a move may never land on.
pub const MAX_Y: i8 = 7;
pub const MIN_Y: i8 = -1;

/// Start position of the local player.
pub const START_X: i8 = 2;
pub const START_Y: i8 = 3;

/// Corners of the 3x3 house block. The scan runs from `HOUSE_TOP_LEFT_X`
/// towards `HOUSE_BOTTOM_RIGHT_X`.
pub const HOUSE_TOP_LEFT_X: i8 = 4;
pub const HOUSE_TOP_LEFT_Y: i8 = 2;
pub const HOUSE_BOTTOM_RIGHT_X: i8 = 2;
pub const HOUSE_BOTTOM_RIGHT_Y: i8 = 4;

/// Number of tiles in one house row.
pub const HOUSE_ROW_LEN: usize = 3;

/// Number of tiles in the house.
pub const HOUSE_TILES: usize = 9;

/// Tiles that must read off for the house to count as destroyed.
pub const HOUSE_DESTROYED_OFF: usize = HOUSE_TILES - 1;

/// Row stride of the wire encoding.
pub const CODEC_SCALE: i8 = 5;

/// Offset added to every encoded coordinate, keeps packets clear of `WIN_SIGNAL`.
pub const CODEC_BIAS: i8 = 50;

/// Byte sent by a device whose house has been destroyed.
pub const WIN_SIGNAL: i8 = 1;

/// Lowest pre-move x for which a move is broadcast.
pub const TRANSMIT_MIN_X: i8 = -5;

/// Highest pre-move x for which a north, south or east move is broadcast.
pub const TRANSMIT_MAX_X: i8 = 0;

/// Highest pre-move x for which a west move is broadcast.
pub const TRANSMIT_MAX_X_WEST: i8 = 1;

/// Banner scrolled on the home screen.
pub const TITLE_TEXT: &str = "HOUSE";

/// Banner scrolled once a round is over.
pub const RESTART_TEXT: &str = "PRESS TO RESTART";
