use web_sys::Window;

use crate::config;
use crate::dom::listener::Listener;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

/// Reports whether the page is scrolled past the navbar threshold, once
/// right away and then on every scroll.
pub fn watch(window: &Window, on_change: impl Fn(bool) + 'static) -> Option<Listener> {
    on_change(is_scrolled(window.scroll_y().unwrap_or(0.0)));
    let win = window.clone();
    Listener::new(window, "scroll", move |_| {
        on_change(is_scrolled(win.scroll_y().unwrap_or(0.0)));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
