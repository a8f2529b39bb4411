use log::Level;

use crate::carousel::Mode;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose carousel tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Scroll distance in pixels after which the nav gets its solid background.
pub const NAV_SCROLLED_THRESHOLD: f64 = 80.0;

/// Scroll distance in pixels after which the back-to-top button shows up.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

/// Share of an element that has to be inside the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const STATS_THRESHOLD: f64 = 0.5;

pub const STAT_COUNT_DURATION_MS: i64 = 1500;
pub const STAT_FRAME_MS: u32 = 16;

/// Viewport widths (exclusive upper bound) and the number of franchise cards
/// shown below each of them.
const FRANCHISE_BREAKPOINTS: &[(f64, usize)] = &[(640.0, 1), (1024.0, 2)];

/// Knobs for one carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub name: &'static str,
    pub mode: Mode,
    pub slide_duration_ms: u32,
    pub transition_ms: u32,
    pub hover_warm_up_ms: u32,
    pub swipe_threshold: f64,
    pub pause_on_hover: bool,
    pub keyboard: bool,
    pub breakpoints: &'static [(f64, usize)],
    pub wide_visible_count: usize,
}

impl CarouselConfig {
    pub fn hero() -> Self {
        Self {
            name: "hero",
            mode: Mode::Linear,
            slide_duration_ms: 6000,
            transition_ms: 1200,
            hover_warm_up_ms: 1000,
            swipe_threshold: 50.0,
            pause_on_hover: true,
            keyboard: true,
            breakpoints: &[],
            wide_visible_count: 1,
        }
    }

    pub fn franchise() -> Self {
        Self {
            name: "franchise",
            mode: Mode::Windowed,
            slide_duration_ms: 5000,
            transition_ms: 600,
            hover_warm_up_ms: 1000,
            swipe_threshold: 40.0,
            pause_on_hover: true,
            keyboard: false,
            breakpoints: FRANCHISE_BREAKPOINTS,
            wide_visible_count: 3,
        }
    }

    pub fn branches() -> Self {
        Self {
            name: "branches",
            mode: Mode::Coverflow,
            slide_duration_ms: 4000,
            transition_ms: 700,
            hover_warm_up_ms: 1000,
            swipe_threshold: 40.0,
            pause_on_hover: false,
            keyboard: false,
            breakpoints: &[],
            wide_visible_count: 1,
        }
    }

    /// How many items a windowed carousel shows at the given viewport width.
    pub fn visible_count_for(&self, width: f64) -> usize {
        self.breakpoints
            .iter()
            .find(|(max_width, _)| width < *max_width)
            .map(|(_, count)| *count)
            .unwrap_or(self.wide_visible_count)
            .max(1)
    }
}
