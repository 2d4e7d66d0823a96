use serde::{Serialize, Deserialize};
use std::fmt;

/// A point on the LED matrix, as signed offsets from the top-left pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`, wrapping on overflow.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One-shot events reported by the navigation switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavEvent {
    Select,
    North,
    South,
    East,
    West,
}

impl NavEvent {
    /// Directional events in the order the input step handles them.
    pub const DIRECTIONS: [NavEvent; 4] = [
        NavEvent::South,
        NavEvent::North,
        NavEvent::East,
        NavEvent::West,
    ];

    /// Movement delta for a directional event, `None` for `Select`.
    pub const fn delta(self) -> Option<(i8, i8)> {
        match self {
            NavEvent::South => Some((0, 1)),
            NavEvent::North => Some((0, -1)),
            NavEvent::East => Some((1, 0)),
            NavEvent::West => Some((-1, 0)),
            NavEvent::Select => None,
        }
    }
}

/// Phase of the duel. Exactly one is active per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Init,
    Playing,
    Over,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Init => "INIT",
            GameState::Playing => "PLAYING",
            GameState::Over => "OVER",
        };
        f.write_str(name)
    }
}

/// The three periodic steps a scheduler drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Render,
    Receive,
    Input,
}

/// How the display presents its current text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextMode {
    #[default]
    Step,
    Scroll,
}

/// Result of a movement request. Callers in the controller ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Position),
    Rejected,
}
