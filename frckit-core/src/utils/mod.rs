//! Utility re-exports for the robot control program.
//!
//! - `auto`: autonomous routine registry and dashboard selector construction
//! - `leds`: LED color helpers, per-frame patterns, and the strip runner
//! - `units`: units of measurement and metric prefix scaling

pub mod auto;
pub mod leds;
pub mod units;

pub use auto::{AutoError, AutoRoutines, OptionChooser, RoutineFactory};
pub use leds::{LedPattern, LedStrip};
pub use units::{Dimension, Prefix, Unit};
