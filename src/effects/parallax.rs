use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::dom::listener::Listener;

/// Styles for the `.bg-glow` and `.hex-grid` layers this effect moves.
pub const BACKDROP_CSS: &str = r#"
    .bg-glow {
        position: fixed;
        top: -20%;
        left: -10%;
        width: 60vw;
        height: 60vw;
        background: radial-gradient(circle, rgba(255, 26, 26, 0.15), transparent 70%);
        pointer-events: none;
        z-index: 0;
    }
    .hex-grid {
        position: fixed;
        top: 50%;
        left: 50%;
        width: 140vw;
        height: 140vh;
        transform: translate(-50%, -50%);
        opacity: 0.05;
        pointer-events: none;
        z-index: 0;
    }
"#;

pub fn glow_transform(scrolled: f64) -> String {
    format!("translate({}px, {}px)", scrolled / 50.0, scrolled / 20.0)
}

pub fn grid_transform(scrolled: f64) -> String {
    format!("translate(-50%, calc(-50% + {}px))", scrolled / 10.0)
}

fn find(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn apply(window: &Window, document: &Document) {
    let scrolled = window.scroll_y().unwrap_or(0.0);
    if let Some(glow) = find(document, ".bg-glow") {
        let _ = glow.style().set_property("transform", &glow_transform(scrolled));
    }
    if let Some(grid) = find(document, ".hex-grid") {
        let _ = grid.style().set_property("transform", &grid_transform(scrolled));
    }
}

/// Background layers drift with the scroll position, at most once per frame.
pub fn install(window: &Window, document: &Document) -> Option<Listener> {
    let ticking = Rc::new(Cell::new(false));
    let win = window.clone();
    let document = document.clone();
    Listener::new(window, "scroll", move |_| {
        if ticking.replace(true) {
            return;
        }
        let frame_ticking = ticking.clone();
        let frame_window = win.clone();
        let frame_document = document.clone();
        let frame = Closure::once_into_js(move || {
            apply(&frame_window, &frame_document);
            frame_ticking.set(false);
        });
        if win.request_animation_frame(frame.unchecked_ref()).is_err() {
            apply(&win, &document);
            ticking.set(false);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_move_at_their_own_rates() {
        assert_eq!(glow_transform(0.0), "translate(0px, 0px)");
        assert_eq!(glow_transform(100.0), "translate(2px, 5px)");
        assert_eq!(grid_transform(100.0), "translate(-50%, calc(-50% + 10px))");
    }

    #[test]
    fn backdrop_styles_cover_both_layers() {
        assert!(BACKDROP_CSS.contains(".bg-glow {"));
        assert!(BACKDROP_CSS.contains(".hex-grid {"));
        assert!(BACKDROP_CSS.contains("position: fixed;"));
    }
}
