//! Small readers for window and document state. Anything missing reads as
//! the harmless default.

use web_sys::MediaQueryList;

use crate::config;

pub fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(config::REDUCED_MOTION_QUERY).ok().flatten())
}

pub fn prefers_reduced_motion() -> bool {
    reduced_motion_query()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn page_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn inner_height() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
}
