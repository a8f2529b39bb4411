use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::clock::Clock;
use super::input::Command;
use super::state::{CarouselState, Mode};
use crate::config::CarouselConfig;

type Listener = Rc<dyn Fn(&CarouselState)>;

struct Inner<C: Clock> {
    state: CarouselState,
    config: CarouselConfig,
    clock: C,
    auto_advance: Option<C::Interval>,
    // Fired guards are only replaced, never dropped from their own callback.
    transition_guard: Option<C::Timeout>,
    warm_up: Option<C::Timeout>,
    hover_pause_ready: bool,
    hovered: bool,
    page_hidden: bool,
    reduced_motion: bool,
    listener: Option<Listener>,
}

impl<C: Clock> Inner<C> {
    fn paused_by_hover(&self) -> bool {
        self.config.pause_on_hover && self.hover_pause_ready && self.hovered
    }

    fn may_auto_advance(&self) -> bool {
        !self.state.is_inert() && !self.reduced_motion && !self.page_hidden && !self.paused_by_hover()
    }
}

/// Timer and input arbitration around a [`CarouselState`].
///
/// Cloning is cheap and every clone drives the same carousel. Timer callbacks
/// only hold weak references, so dropping the last clone silences them.
pub struct Controller<C: Clock> {
    inner: Rc<RefCell<Inner<C>>>,
}

impl<C: Clock> Clone for Controller<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: Clock> Controller<C> {
    pub fn new(clock: C, config: CarouselConfig, len: usize) -> Self {
        let state = CarouselState::new(len, config.mode);
        if state.is_inert() {
            debug!("{} carousel has no items, staying inert", config.name);
        } else {
            debug!("{} carousel ready with {} items", config.name, len);
        }
        let controller = Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                config,
                clock,
                auto_advance: None,
                transition_guard: None,
                warm_up: None,
                hover_pause_ready: false,
                hovered: false,
                page_hidden: false,
                reduced_motion: false,
                listener: None,
            })),
        };
        controller.arm_warm_up();
        controller
    }

    fn upgrade(weak: &Weak<RefCell<Inner<C>>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn arm_warm_up(&self) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let millis = inner.config.hover_warm_up_ms;
        let handle = inner.clock.timeout(
            millis,
            Box::new(move || {
                if let Some(controller) = Controller::upgrade(&weak) {
                    controller.finish_warm_up();
                }
            }),
        );
        inner.warm_up = Some(handle);
    }

    /// A pointer that arrived during the warm-up and is still there pauses
    /// the cadence now.
    fn finish_warm_up(&self) {
        let pause = {
            let mut inner = self.inner.borrow_mut();
            inner.hover_pause_ready = true;
            inner.paused_by_hover()
        };
        if pause {
            debug!("{} carousel paused by a pointer resting on it", self.inner.borrow().config.name);
            self.stop_auto_advance();
        }
    }

    pub fn state(&self) -> CarouselState {
        self.inner.borrow().state.clone()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.inner.borrow().auto_advance.is_some()
    }

    /// Registers the single observer of state changes and hands it the
    /// current state right away.
    pub fn subscribe(&self, listener: Listener) {
        self.inner.borrow_mut().listener = Some(listener);
        self.notify();
    }

    fn notify(&self) {
        let (listener, state) = {
            let inner = self.inner.borrow();
            (inner.listener.clone(), inner.state.clone())
        };
        if let Some(listener) = listener {
            listener(&state);
        }
    }

    pub fn go_to(&self, index: usize) -> bool {
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if !inner.state.go_to(index) {
                return false;
            }
            debug!(
                "{} carousel moved to {}",
                inner.config.name,
                inner.state.current()
            );
            let weak = Rc::downgrade(&self.inner);
            let handle = inner.clock.timeout(
                inner.config.transition_ms,
                Box::new(move || {
                    if let Some(controller) = Controller::upgrade(&weak) {
                        controller.finish_transition();
                    }
                }),
            );
            inner.transition_guard = Some(handle);
        }
        self.notify();
        true
    }

    pub fn next(&self) -> bool {
        self.step(1)
    }

    pub fn prev(&self) -> bool {
        self.step(-1)
    }

    fn step(&self, delta: isize) -> bool {
        let target = self.inner.borrow().state.step_target(delta);
        match target {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    fn finish_transition(&self) {
        self.inner.borrow_mut().state.finish_transition();
        self.notify();
    }

    /// Arms the repeating advance, replacing any timer already running.
    pub fn start_auto_advance(&self) {
        self.stop_auto_advance();
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if !inner.may_auto_advance() {
                return;
            }
            inner.state.restart_progress();
            let weak = Rc::downgrade(&self.inner);
            let handle = inner.clock.interval(
                inner.config.slide_duration_ms,
                Box::new(move || {
                    if let Some(controller) = Controller::upgrade(&weak) {
                        controller.auto_step();
                    }
                }),
            );
            inner.auto_advance = Some(handle);
        }
        self.notify();
    }

    // Windowed strips rewind to the first card once the last window is shown.
    fn auto_step(&self) {
        let target = {
            let inner = self.inner.borrow();
            let state = &inner.state;
            if state.mode() == Mode::Windowed && state.at_end() {
                Some(0)
            } else {
                state.step_target(1)
            }
        };
        if let Some(index) = target {
            self.go_to(index);
        }
    }

    pub fn stop_auto_advance(&self) {
        let handle = self.inner.borrow_mut().auto_advance.take();
        drop(handle);
    }

    /// Runs a user command and restarts the automatic cadence from now.
    pub fn apply(&self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Prev => self.prev(),
            Command::GoTo(index) => self.go_to(index),
        };
        self.start_auto_advance();
    }

    pub fn pointer_enter(&self) {
        let pause = {
            let mut inner = self.inner.borrow_mut();
            inner.hovered = true;
            inner.paused_by_hover()
        };
        if pause {
            self.stop_auto_advance();
        }
    }

    pub fn pointer_leave(&self) {
        let resume = {
            let mut inner = self.inner.borrow_mut();
            inner.hovered = false;
            inner.config.pause_on_hover && inner.hover_pause_ready
        };
        if resume {
            self.start_auto_advance();
        }
    }

    /// Browsers throttle timers in background tabs, so the cadence is
    /// stopped while hidden and restarted on return.
    pub fn set_page_hidden(&self, hidden: bool) {
        self.inner.borrow_mut().page_hidden = hidden;
        if hidden {
            self.stop_auto_advance();
        } else {
            self.start_auto_advance();
        }
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.reduced_motion != reduced;
            inner.reduced_motion = reduced;
            changed
        };
        if reduced {
            debug!("reduced motion requested, auto-advance disabled");
            self.stop_auto_advance();
        } else if changed {
            self.start_auto_advance();
        }
    }

    pub fn set_visible_count(&self, count: usize) {
        let changed = self.inner.borrow_mut().state.set_visible_count(count);
        if changed {
            self.notify();
        }
    }

    /// Stops timers and forgets the observer; used on unmount.
    pub fn shutdown(&self) {
        self.stop_auto_advance();
        self.inner.borrow_mut().listener = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::carousel::clock::manual::ManualClock;
    use crate::carousel::state::Presentation;

    fn hero(len: usize) -> (ManualClock, Controller<ManualClock>) {
        let clock = ManualClock::new();
        let controller = Controller::new(clock.clone(), CarouselConfig::hero(), len);
        (clock, controller)
    }

    #[test]
    fn starting_twice_leaves_one_timer() {
        let (clock, controller) = hero(4);
        controller.start_auto_advance();
        controller.start_auto_advance();
        assert_eq!(clock.live_intervals(), 1);
        clock.advance(6000);
        assert_eq!(controller.state().current(), 1);
    }

    #[test]
    fn auto_advance_wraps_around() {
        let (clock, controller) = hero(3);
        controller.start_auto_advance();
        clock.advance(6000 * 3);
        assert_eq!(controller.state().current(), 0);
    }

    #[test]
    fn stop_is_idempotent() {
        let (clock, controller) = hero(3);
        controller.stop_auto_advance();
        controller.start_auto_advance();
        controller.stop_auto_advance();
        controller.stop_auto_advance();
        assert!(!controller.is_auto_advancing());
        assert_eq!(clock.live_intervals(), 0);
        clock.advance(20_000);
        assert_eq!(controller.state().current(), 0);
    }

    #[test]
    fn transition_guard_releases_after_fixed_delay() {
        let (clock, controller) = hero(4);
        assert!(controller.next());
        assert!(!controller.next());
        assert_eq!(controller.state().current(), 1);
        clock.advance(1199);
        assert!(controller.state().is_transitioning());
        assert_eq!(controller.state().presentation(0), Presentation::Leaving);
        clock.advance(1);
        assert!(!controller.state().is_transitioning());
        assert_eq!(controller.state().presentation(0), Presentation::Idle);
        assert!(controller.next());
        assert_eq!(controller.state().current(), 2);
    }

    #[test]
    fn user_input_resets_the_cadence() {
        let (clock, controller) = hero(5);
        controller.start_auto_advance();
        clock.advance(5000);
        controller.apply(Command::Next);
        assert_eq!(controller.state().current(), 1);
        clock.advance(5000);
        assert_eq!(controller.state().current(), 1);
        clock.advance(1000);
        assert_eq!(controller.state().current(), 2);
        assert_eq!(clock.live_intervals(), 1);
    }

    #[test]
    fn dropped_command_still_rearms() {
        let (clock, controller) = hero(5);
        controller.apply(Command::GoTo(3));
        controller.apply(Command::Prev);
        assert_eq!(controller.state().current(), 3);
        assert!(controller.is_auto_advancing());
        assert_eq!(clock.live_intervals(), 1);
    }

    #[test]
    fn hover_is_ignored_during_warm_up() {
        let (clock, controller) = hero(3);
        controller.start_auto_advance();
        clock.advance(500);
        controller.pointer_enter();
        assert!(controller.is_auto_advancing());
        clock.advance(5500);
        assert_eq!(controller.state().current(), 1);
    }

    #[test]
    fn pointer_resting_through_warm_up_pauses_once_ready() {
        let (clock, controller) = hero(5);
        controller.start_auto_advance();
        clock.advance(500);
        controller.pointer_enter();
        clock.advance(500);
        assert!(!controller.is_auto_advancing());
        clock.advance(20_000);
        assert_eq!(controller.state().current(), 0);
        controller.pointer_leave();
        assert!(controller.is_auto_advancing());
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let (clock, controller) = hero(3);
        controller.start_auto_advance();
        clock.advance(1000);
        controller.pointer_enter();
        assert!(!controller.is_auto_advancing());
        clock.advance(20_000);
        assert_eq!(controller.state().current(), 0);
        controller.pointer_leave();
        assert!(controller.is_auto_advancing());
        clock.advance(6000);
        assert_eq!(controller.state().current(), 1);
    }

    #[test]
    fn input_while_hovered_keeps_pause() {
        let (clock, controller) = hero(3);
        clock.advance(1000);
        controller.pointer_enter();
        controller.apply(Command::Next);
        assert_eq!(controller.state().current(), 1);
        assert!(!controller.is_auto_advancing());
    }

    #[test]
    fn carousels_without_hover_pause_keep_running() {
        let clock = ManualClock::new();
        let controller = Controller::new(clock.clone(), CarouselConfig::branches(), 5);
        controller.start_auto_advance();
        clock.advance(2000);
        controller.pointer_enter();
        assert!(controller.is_auto_advancing());
    }

    #[test]
    fn hidden_page_stops_and_visible_restarts() {
        let (clock, controller) = hero(3);
        controller.start_auto_advance();
        controller.set_page_hidden(true);
        assert_eq!(clock.live_intervals(), 0);
        clock.advance(30_000);
        assert_eq!(controller.state().current(), 0);
        controller.set_page_hidden(false);
        assert_eq!(clock.live_intervals(), 1);
    }

    #[test]
    fn hidden_before_start_never_arms() {
        let (clock, controller) = hero(3);
        controller.set_page_hidden(true);
        controller.start_auto_advance();
        assert!(!controller.is_auto_advancing());
        assert_eq!(clock.live_intervals(), 0);
    }

    #[test]
    fn reduced_motion_change_follows_preference() {
        let (clock, controller) = hero(3);
        controller.start_auto_advance();
        controller.set_reduced_motion(true);
        assert_eq!(clock.live_intervals(), 0);
        controller.set_reduced_motion(false);
        assert!(controller.is_auto_advancing());
        assert_eq!(clock.live_intervals(), 1);
        clock.advance(6000);
        assert_eq!(controller.state().current(), 1);
    }

    #[test]
    fn reduced_motion_never_arms() {
        let (clock, controller) = hero(3);
        controller.set_reduced_motion(true);
        controller.start_auto_advance();
        controller.apply(Command::Next);
        assert!(!controller.is_auto_advancing());
        assert_eq!(clock.live_intervals(), 0);
        assert_eq!(controller.state().current(), 1);
    }

    #[test]
    fn inert_controller_does_nothing() {
        let (clock, controller) = hero(0);
        assert!(!controller.next());
        assert!(!controller.prev());
        assert!(!controller.go_to(2));
        controller.apply(Command::Next);
        controller.start_auto_advance();
        controller.pointer_enter();
        controller.pointer_leave();
        assert!(!controller.is_auto_advancing());
        assert_eq!(clock.live_intervals(), 0);
        assert!(controller.state().is_inert());
    }

    #[test]
    fn listener_sees_every_change() {
        let (clock, controller) = hero(3);
        let seen = Rc::new(Cell::new(0usize));
        let last = Rc::new(Cell::new(usize::MAX));
        {
            let seen = seen.clone();
            let last = last.clone();
            controller.subscribe(Rc::new(move |state: &CarouselState| {
                seen.set(seen.get() + 1);
                last.set(state.current());
            }));
        }
        assert_eq!(seen.get(), 1);
        assert_eq!(last.get(), 0);
        controller.next();
        assert_eq!(last.get(), 1);
        clock.advance(1200);
        assert_eq!(seen.get(), 3);
        controller.shutdown();
        controller.next();
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn windowed_resize_clamps_and_notifies() {
        let clock = ManualClock::new();
        let controller = Controller::new(clock.clone(), CarouselConfig::franchise(), 6);
        assert_eq!(controller.state().mode(), Mode::Windowed);
        controller.go_to(5);
        clock.advance(600);
        controller.set_visible_count(3);
        assert_eq!(controller.state().current(), 3);
        assert!(!controller.next());
    }

    #[test]
    fn windowed_auto_advance_rewinds_at_the_end() {
        let clock = ManualClock::new();
        let controller = Controller::new(clock.clone(), CarouselConfig::franchise(), 6);
        controller.set_visible_count(3);
        controller.start_auto_advance();
        let mut seen = Vec::new();
        for _ in 0..5 {
            clock.advance(5000);
            seen.push(controller.state().current());
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
        assert_eq!(clock.live_intervals(), 1);
    }

    #[test]
    fn windowed_next_still_clamps_at_the_end() {
        let clock = ManualClock::new();
        let controller = Controller::new(clock.clone(), CarouselConfig::franchise(), 6);
        controller.set_visible_count(3);
        controller.go_to(3);
        clock.advance(600);
        assert!(!controller.next());
        assert_eq!(controller.state().current(), 3);
    }

    #[test]
    fn dropping_controller_silences_timers() {
        let (clock, controller) = hero(3);
        controller.start_auto_advance();
        controller.next();
        drop(controller);
        clock.advance(60_000);
        assert_eq!(clock.live_intervals(), 0);
    }
}
