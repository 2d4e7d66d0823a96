//! Device collaborators consumed by the game core.
//!
//! The controller only sees the three traits below. `LedMatrix`, `NavQueue`
//! and `IrLink` are host-side stand-ins used by the tests and the terminal demo.

pub mod ir;
pub mod matrix;
pub mod navswitch;

pub use ir::IrLink;
pub use matrix::LedMatrix;
pub use navswitch::NavQueue;

use crate::game::types::{NavEvent, Position, TextMode};

/// Pixel and text surface of a device. Calls never fail.
pub trait Display {
    fn draw_point(&mut self, pos: Position, on: bool);

    /// Fills the rectangle spanned by the two corners, given in any order.
    fn draw_box(&mut self, a: Position, b: Position, on: bool);

    /// Reads a pixel. Points outside the matrix read as off.
    fn pixel(&self, pos: Position) -> bool;

    fn clear(&mut self);
    fn refresh(&mut self);
    fn set_text_mode(&mut self, mode: TextMode);
    fn show_text(&mut self, text: &str);
}

/// Debounced navigation switch.
pub trait InputSource {
    /// Samples the switch. Events become visible to `take_event` afterwards.
    fn poll(&mut self);

    /// Returns whether `event` happened since the last poll, consuming it.
    fn take_event(&mut self, event: NavEvent) -> bool;
}

/// One-byte-at-a-time link to the opposing device.
pub trait Transport {
    fn byte_ready(&mut self) -> bool;
    fn read_byte(&mut self) -> i8;
    fn write_byte(&mut self, byte: i8);
}

/// Everything one device exposes to the controller.
#[derive(Debug, Default)]
pub struct Peripherals<D, I, T> {
    pub display: D,
    pub input: I,
    pub transport: T,
}

impl<D, I, T> Peripherals<D, I, T> {
    pub fn new(display: D, input: I, transport: T) -> Self {
        Self { display, input, transport }
    }
}
