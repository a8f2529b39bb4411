/// Navigation request coming from a button, key, swipe or dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
}

pub fn key_command(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" => Some(Command::Prev),
        "ArrowRight" => Some(Command::Next),
        _ => None,
    }
}

/// Turns a touch start/end pair into a command once the finger travelled
/// further than the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn end(&mut self, x: f64) -> Option<Command> {
        let diff = self.start_x.take()? - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        // Finger moved left: bring in the next slide
        if diff > 0.0 {
            Some(Command::Next)
        } else {
            Some(Command::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_prev_and_next() {
        assert_eq!(key_command("ArrowLeft"), Some(Command::Prev));
        assert_eq!(key_command("ArrowRight"), Some(Command::Next));
        assert_eq!(key_command("ArrowUp"), None);
        assert_eq!(key_command("Enter"), None);
    }

    #[test]
    fn swipe_left_goes_forward() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(300.0);
        assert_eq!(swipe.end(200.0), Some(Command::Next));
    }

    #[test]
    fn swipe_right_goes_back() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(100.0);
        assert_eq!(swipe.end(180.0), Some(Command::Prev));
    }

    #[test]
    fn short_swipes_are_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(100.0);
        assert_eq!(swipe.end(150.0), None);
        swipe.begin(100.0);
        assert_eq!(swipe.end(49.0), Some(Command::Next));
    }

    #[test]
    fn end_without_begin_does_nothing() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.end(10.0), None);
        swipe.begin(400.0);
        swipe.end(100.0);
        assert_eq!(swipe.end(0.0), None);
    }
}
