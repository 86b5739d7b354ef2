//! Frame driver: turns window events and redraw requests into
//! camera updates, simulation steps and draws.

mod clock;
mod frame_driver;
mod types;

pub use clock::*;
pub use frame_driver::*;
pub use types::*;
