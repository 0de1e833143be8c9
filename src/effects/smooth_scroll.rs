use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::dom::listener::Listener;
use crate::dom::registry::select_all_in;

/// Document y coordinate to scroll to so the target sits just below the navbar.
pub fn anchor_offset(target_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    target_top + scroll_y - navbar_height - config::ANCHOR_GAP
}

/// In-page `#anchor` links scroll smoothly instead of jumping.
pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

pub fn install(window: &Window, document: &Document) -> SmoothScroll {
    let mut listeners = Vec::new();
    for link in select_all_in(document, "a[href^=\"#\"]") {
        let window = window.clone();
        let document = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        if href == "#" {
            continue;
        }
        listeners.extend(Listener::new(&link, "click", move |event| {
            // Malformed selectors just fall back to the browser's jump.
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            event.prevent_default();

            let navbar_height = document
                .query_selector(".navbar")
                .ok()
                .flatten()
                .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
                .map(|nav| nav.offset_height() as f64)
                .unwrap_or(0.0);
            let top = anchor_offset(
                target.get_bounding_client_rect().top(),
                window.scroll_y().unwrap_or(0.0),
                navbar_height,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }));
    }
    SmoothScroll { _listeners: listeners }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clears_navbar_and_gap() {
        assert_eq!(anchor_offset(300.0, 1000.0, 80.0), 1200.0);
        assert_eq!(anchor_offset(-200.0, 500.0, 0.0), 280.0);
    }
}
