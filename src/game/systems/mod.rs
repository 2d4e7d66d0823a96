pub mod input;
pub mod receive;
pub mod render;

pub use input::*;
pub use receive::*;
pub use render::*;
