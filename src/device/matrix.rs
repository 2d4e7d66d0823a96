//! In-memory LED matrix.

use crate::config::game::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::device::Display;
use crate::game::types::{Position, TextMode};

const WIDTH: usize = DISPLAY_WIDTH as usize;
const HEIGHT: usize = DISPLAY_HEIGHT as usize;

/// Framebuffer for the 5x7 matrix plus the banner text state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedMatrix {
    pixels: [[bool; WIDTH]; HEIGHT],
    text: Option<String>,
    text_mode: TextMode,
    refreshes: u64,
}

impl LedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(pos: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.x).ok().filter(|x| *x < WIDTH)?;
        let y = usize::try_from(pos.y).ok().filter(|y| *y < HEIGHT)?;
        Some((x, y))
    }

    /// Rows of the framebuffer, top first.
    pub fn rows(&self) -> &[[bool; WIDTH]; HEIGHT] {
        &self.pixels
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().flatten().filter(|on| **on).count()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    /// Number of `refresh` calls so far.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }
}

impl Display for LedMatrix {
    fn draw_point(&mut self, pos: Position, on: bool) {
        if let Some((x, y)) = Self::index(pos) {
            self.pixels[y][x] = on;
        }
    }

    fn draw_box(&mut self, a: Position, b: Position, on: bool) {
        for y in a.y.min(b.y)..=a.y.max(b.y) {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                self.draw_point(Position::new(x, y), on);
            }
        }
    }

    fn pixel(&self, pos: Position) -> bool {
        Self::index(pos).is_some_and(|(x, y)| self.pixels[y][x])
    }

    fn clear(&mut self) {
        self.pixels = [[false; WIDTH]; HEIGHT];
        self.text = None;
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn set_text_mode(&mut self, mode: TextMode) {
        self.text_mode = mode;
    }

    fn show_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}
