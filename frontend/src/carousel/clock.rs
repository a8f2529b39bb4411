use gloo_timers::callback::{Interval, Timeout};

/// Source of repeating and one-shot timers.
///
/// Dropping a returned handle cancels the timer, so "disarm" is simply
/// dropping the handle and "re-arm" is replacing it.
pub trait Clock: 'static {
    type Interval: 'static;
    type Timeout: 'static;

    fn interval(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Interval;
    fn timeout(&self, millis: u32, fire: Box<dyn FnOnce()>) -> Self::Timeout;
}

/// Browser timers via `setInterval`/`setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClock;

impl Clock for GlooClock {
    type Interval = Interval;
    type Timeout = Timeout;

    fn interval(&self, millis: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis, tick)
    }

    fn timeout(&self, millis: u32, fire: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, fire)
    }
}
