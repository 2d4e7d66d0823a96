/// Scheduler configuration constants.
///
/// Rates are in hertz. Each step runs every `BASE_RATE / rate` base ticks.
pub const BASE_RATE: u32 = 500; // Base tick rate of the scheduler.

/// Rate of the render step.
pub const RENDER_RATE: u32 = 250;

/// Rate of the infrared receive step.
pub const RECEIVE_RATE: u32 = 100;

/// Rate of the navigation switch step.
pub const INPUT_RATE: u32 = 100;

/// Base ticks between two actions of the demo opponent.
pub const BOT_ACTION_PERIOD: u64 = 150;
