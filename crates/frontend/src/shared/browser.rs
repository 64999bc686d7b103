use web_sys::{window, ScrollBehavior, ScrollToOptions};

/// Fallback width when the window cannot be queried; treated as desktop
const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
}

pub fn scroll_to_top() {
    let Some(w) = window() else {
        log::error!("scroll_to_top: no window");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    w.scroll_to_with_scroll_to_options(&options);
}

/// Three-digit sequence for simulated request references
pub fn random_sequence() -> u32 {
    (js_sys::Math::random() * 1000.0).floor() as u32
}
