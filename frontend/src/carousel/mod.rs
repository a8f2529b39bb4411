//! Auto-advancing carousel shared by the hero slider, the franchise strip and
//! the branch coverflow.
//!
//! [`CarouselState`] holds the pure index/transition bookkeeping,
//! [`Controller`] layers timers and input arbitration on top of it, and the
//! [`Clock`] trait keeps the timer source swappable.

pub mod clock;
pub mod controller;
pub mod index;
pub mod input;
pub mod state;

pub use clock::{Clock, GlooClock};
pub use controller::Controller;
pub use input::{key_command, Command, SwipeTracker};
pub use state::{CarouselState, Mode, Presentation};
