use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::dom::listener::Listener;

/// How far the logo glow may travel from centre, in pixels, per axis.
const GLOW_TRAVEL: f64 = 20.0;

/// Pointer position mapped to a glow offset around the centre.
pub fn glow_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client_x / width - 0.5) * GLOW_TRAVEL,
        (client_y / height - 0.5) * GLOW_TRAVEL,
    )
}

pub fn install(window: &Window, document: &Document) -> Option<Listener> {
    let win = window.clone();
    let doc = document.clone();
    Listener::new(document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Ok(Some(hero)) = doc.query_selector(".hero") else {
            return;
        };
        let rect = hero.get_bounding_client_rect();
        let y = event.client_y() as f64;
        if y < rect.top() || y > rect.bottom() {
            return;
        }

        let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let height = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        let (dx, dy) = glow_offset(event.client_x() as f64, y, width, height);

        if let Some(glow) = doc
            .query_selector(".logo-glow")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            let _ = glow.style().set_property(
                "transform",
                &format!("translate(calc(-50% + {}px), calc(-50% + {}px))", dx, dy),
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_still_and_corners_reach_the_edge() {
        assert_eq!(glow_offset(500.0, 400.0, 1000.0, 800.0), (0.0, 0.0));
        assert_eq!(glow_offset(0.0, 0.0, 1000.0, 800.0), (-10.0, -10.0));
        assert_eq!(glow_offset(1000.0, 800.0, 1000.0, 800.0), (10.0, 10.0));
    }

    #[test]
    fn zero_viewport_does_not_divide() {
        assert_eq!(glow_offset(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }
}
