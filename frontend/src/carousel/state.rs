use super::index::{circular_offset, clamp_index, wrap_index};

/// How an item's distance from the current index turns into a display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One slide at a time, wrapping at both ends.
    Linear,
    /// A run of `visible_count` consecutive items, clamped at both ends.
    Windowed,
    /// Items arranged around the current one by signed ring offset.
    Coverflow,
}

/// Mutually exclusive marker carried by a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Active,
    Leaving,
    Visible,
    Hidden,
    Left1,
    Right1,
    Left2,
    Right2,
    Idle,
}

impl Presentation {
    pub fn class(self) -> &'static str {
        match self {
            Presentation::Active => "active",
            Presentation::Leaving => "leaving",
            Presentation::Visible => "visible",
            Presentation::Hidden => "hidden",
            Presentation::Left1 => "left-1",
            Presentation::Right1 => "right-1",
            Presentation::Left2 => "left-2",
            Presentation::Right2 => "right-2",
            Presentation::Idle => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    leaving: Option<usize>,
    transitioning: bool,
    mode: Mode,
    visible_count: usize,
    progress_epoch: u32,
}

impl CarouselState {
    pub fn new(len: usize, mode: Mode) -> Self {
        Self {
            len,
            current: 0,
            leaving: None,
            transitioning: false,
            mode,
            visible_count: 1,
            progress_epoch: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A carousel without items ignores every operation.
    pub fn is_inert(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn progress_epoch(&self) -> u32 {
        self.progress_epoch
    }

    /// Highest index the cursor may rest on.
    pub fn max_index(&self) -> usize {
        match self.mode {
            Mode::Windowed => self.len.saturating_sub(self.visible_count),
            Mode::Linear | Mode::Coverflow => self.len.saturating_sub(1),
        }
    }

    fn normalize(&self, index: isize) -> usize {
        match self.mode {
            Mode::Windowed => clamp_index(index, self.max_index()),
            Mode::Linear | Mode::Coverflow => wrap_index(index, self.len),
        }
    }

    /// Index reached by moving `delta` steps from the current one, or `None`
    /// for an inert carousel.
    pub fn step_target(&self, delta: isize) -> Option<usize> {
        if self.is_inert() {
            return None;
        }
        Some(self.normalize(self.current as isize + delta))
    }

    /// Moves the cursor to `index`. Returns `false` and leaves the state
    /// untouched when the carousel is inert, busy, or already there.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_inert() || self.transitioning {
            return false;
        }
        let target = self.normalize(index.min(isize::MAX as usize) as isize);
        if target == self.current {
            return false;
        }
        self.leaving = Some(self.current);
        self.current = target;
        self.transitioning = true;
        self.restart_progress();
        true
    }

    pub fn finish_transition(&mut self) {
        self.transitioning = false;
        self.leaving = None;
    }

    pub fn restart_progress(&mut self) {
        self.progress_epoch = self.progress_epoch.wrapping_add(1);
    }

    /// Changes how many items a windowed carousel shows, pulling the cursor
    /// back when the window would overrun the end.
    pub fn set_visible_count(&mut self, count: usize) -> bool {
        let count = match self.mode {
            Mode::Windowed => count.max(1),
            Mode::Linear | Mode::Coverflow => 1,
        };
        if count == self.visible_count {
            return false;
        }
        self.visible_count = count;
        let clamped = self.current.min(self.max_index());
        if clamped != self.current {
            self.current = clamped;
            self.leaving = None;
        }
        true
    }

    pub fn offset_of(&self, index: usize) -> isize {
        circular_offset(self.current, index, self.len)
    }

    pub fn presentation(&self, index: usize) -> Presentation {
        if index == self.current {
            return Presentation::Active;
        }
        match self.mode {
            Mode::Linear => {
                if self.leaving == Some(index) {
                    Presentation::Leaving
                } else {
                    Presentation::Idle
                }
            }
            Mode::Windowed => {
                if index > self.current && index < self.current + self.visible_count {
                    Presentation::Visible
                } else {
                    Presentation::Hidden
                }
            }
            Mode::Coverflow => match self.offset_of(index) {
                -1 => Presentation::Left1,
                1 => Presentation::Right1,
                -2 => Presentation::Left2,
                2 => Presentation::Right2,
                _ => Presentation::Hidden,
            },
        }
    }

    /// 1-based position, zero padded to two digits.
    pub fn counter_label(&self) -> String {
        format!("{:02}", self.current + 1)
    }

    pub fn total_label(&self) -> String {
        format!("{:02}", self.len)
    }

    /// Horizontal shift of a windowed track, in percent of its width.
    pub fn track_shift_percent(&self) -> f64 {
        self.current as f64 * 100.0 / self.visible_count as f64
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current >= self.max_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(state: &mut CarouselState) {
        state.finish_transition();
    }

    fn active_count(state: &CarouselState) -> usize {
        (0..state.len())
            .filter(|i| state.presentation(*i) == Presentation::Active)
            .count()
    }

    #[test]
    fn next_n_times_returns_to_start() {
        let mut state = CarouselState::new(5, Mode::Linear);
        for _ in 0..5 {
            let target = state.step_target(1).unwrap();
            assert!(state.go_to(target));
            settle(&mut state);
        }
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn go_to_current_is_a_no_op() {
        let mut state = CarouselState::new(4, Mode::Linear);
        state.go_to(2);
        settle(&mut state);
        let before = state.clone();
        assert!(!state.go_to(2));
        assert_eq!(state, before);
        assert_eq!(state.presentation(2), Presentation::Active);
    }

    #[test]
    fn navigation_is_dropped_while_transitioning() {
        let mut state = CarouselState::new(4, Mode::Linear);
        assert!(state.go_to(1));
        assert!(state.is_transitioning());
        assert!(!state.go_to(3));
        assert_eq!(state.current(), 1);
        settle(&mut state);
        assert!(state.go_to(3));
    }

    #[test]
    fn linear_marks_previous_slide_as_leaving() {
        let mut state = CarouselState::new(3, Mode::Linear);
        state.go_to(1);
        assert_eq!(state.presentation(0), Presentation::Leaving);
        assert_eq!(state.presentation(1), Presentation::Active);
        assert_eq!(state.presentation(2), Presentation::Idle);
        settle(&mut state);
        assert_eq!(state.presentation(0), Presentation::Idle);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let state = CarouselState::new(6, Mode::Linear);
        assert_eq!(state.step_target(-1), Some(5));
    }

    #[test]
    fn out_of_range_go_to_is_normalized() {
        let mut linear = CarouselState::new(4, Mode::Linear);
        assert!(linear.go_to(6));
        assert_eq!(linear.current(), 2);

        let mut windowed = CarouselState::new(6, Mode::Windowed);
        windowed.set_visible_count(3);
        assert!(windowed.go_to(40));
        assert_eq!(windowed.current(), 3);
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        let steps = [1, 1, -1, 1, -1, -1, -1, 1, 1, 1, 1, 1, -1, 1, 1];
        for len in 1..=8 {
            for mode in [Mode::Linear, Mode::Coverflow, Mode::Windowed] {
                let mut state = CarouselState::new(len, mode);
                state.set_visible_count(3);
                for delta in steps {
                    let target = state.step_target(delta).unwrap();
                    state.go_to(target);
                    settle(&mut state);
                    assert!(state.current() <= state.max_index());
                    assert!(state.current() < len);
                    assert_eq!(active_count(&state), 1);
                }
            }
        }
    }

    #[test]
    fn windowed_clamps_instead_of_wrapping() {
        let mut state = CarouselState::new(5, Mode::Windowed);
        state.set_visible_count(2);
        assert_eq!(state.step_target(-1), Some(0));
        state.go_to(3);
        settle(&mut state);
        assert!(state.at_end());
        assert_eq!(state.step_target(1), Some(3));
        assert_eq!(state.presentation(3), Presentation::Active);
        assert_eq!(state.presentation(4), Presentation::Visible);
        assert_eq!(state.presentation(2), Presentation::Hidden);
    }

    #[test]
    fn windowed_resize_pulls_cursor_back() {
        let mut state = CarouselState::new(6, Mode::Windowed);
        state.go_to(5);
        settle(&mut state);
        assert_eq!(state.current(), 5);
        assert!(state.set_visible_count(3));
        assert_eq!(state.current(), 3);
        assert!(!state.set_visible_count(3));
        assert_eq!(state.track_shift_percent(), 100.0);
    }

    #[test]
    fn windowed_with_fewer_items_than_slots_stays_put() {
        let mut state = CarouselState::new(2, Mode::Windowed);
        state.set_visible_count(3);
        assert_eq!(state.max_index(), 0);
        assert!(!state.go_to(1));
        assert_eq!(state.presentation(1), Presentation::Visible);
    }

    #[test]
    fn coverflow_maps_offsets_to_classes() {
        let mut state = CarouselState::new(7, Mode::Coverflow);
        state.go_to(3);
        assert_eq!(state.offset_of(5), 2);
        assert_eq!(state.presentation(5), Presentation::Right2);
        assert_eq!(state.offset_of(1), -2);
        assert_eq!(state.presentation(1), Presentation::Left2);
        assert!(state.offset_of(0).abs() > 2);
        assert_eq!(state.presentation(0), Presentation::Hidden);
        assert_eq!(state.presentation(2), Presentation::Left1);
        assert_eq!(state.presentation(4), Presentation::Right1);
        assert_eq!(state.presentation(6), Presentation::Hidden);
        assert_eq!(state.presentation(3).class(), "active");
    }

    #[test]
    fn coverflow_neighbours_wrap_around_the_ring() {
        let state = CarouselState::new(5, Mode::Coverflow);
        assert_eq!(state.presentation(4), Presentation::Left1);
        assert_eq!(state.presentation(3), Presentation::Left2);
        assert_eq!(state.presentation(1), Presentation::Right1);
    }

    #[test]
    fn inert_carousel_ignores_everything() {
        let mut state = CarouselState::new(0, Mode::Linear);
        assert!(state.is_inert());
        assert_eq!(state.step_target(1), None);
        assert_eq!(state.step_target(-1), None);
        assert!(!state.go_to(0));
        assert!(!state.go_to(3));
        assert_eq!(state.current(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn counter_is_one_based_and_padded() {
        let mut state = CarouselState::new(12, Mode::Linear);
        assert_eq!(state.counter_label(), "01");
        state.go_to(10);
        assert_eq!(state.counter_label(), "11");
        assert_eq!(state.total_label(), "12");
    }

    #[test]
    fn accepted_navigation_restarts_progress() {
        let mut state = CarouselState::new(3, Mode::Linear);
        let epoch = state.progress_epoch();
        state.go_to(1);
        assert_eq!(state.progress_epoch(), epoch + 1);
        state.go_to(2);
        assert_eq!(state.progress_epoch(), epoch + 1);
    }
}
