pub mod chain;
pub mod driver;
pub mod easing;
pub mod sequence;
pub mod state;

use std::time::Duration;

pub use chain::{Chain, Traverse};
pub use driver::{Driver, FrameRequest};
pub use sequence::{Direction, Sequence};
pub use state::{State, Step};

/// Fill colors, one per node in the chain
pub const PALETTE: [&str; 5] = ["#3F51B5", "#4CAF50", "#03A9F4", "#F44336", "#009688"];

/// Number of bars stacked in a single frame
pub const BARS: usize = 5;

/// Scale advanced per tick (~250 ticks for a full 0 -> 1 sweep)
pub const STEP: f32 = 0.02 / BARS as f32;

/// Delay between steady-state animation frames
pub const DEFAULT_DELAY: Duration = Duration::from_millis(20);
