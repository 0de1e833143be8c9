use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config;
use crate::dom::listener::Listener;
use crate::dom::registry::select_all_in;

/// Pairs with the `ripple` keyframes in the page stylesheet.
pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

const RIPPLE_SIZE: f64 = 100.0;

pub fn ripple_style(x: f64, y: f64) -> String {
    format!(
        "position: absolute; background: rgba(255, 255, 255, 0.3); border-radius: 50%; \
         transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; \
         left: {x}px; top: {y}px; width: {size}px; height: {size}px; \
         margin-left: -{half}px; margin-top: -{half}px;",
        size = RIPPLE_SIZE,
        half = RIPPLE_SIZE / 2.0,
    )
}

fn spawn(document: &Document, button: &HtmlElement, event: &MouseEvent) {
    let rect = button.get_bounding_client_rect();
    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();

    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let _ = ripple.set_attribute("style", &ripple_style(x, y));
    let style = button.style();
    let _ = style.set_property("position", "relative");
    let _ = style.set_property("overflow", "hidden");
    if button.append_child(&ripple).is_err() {
        return;
    }
    Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
}

/// Primary buttons splash a ripple from the click point.
pub struct Ripples {
    _listeners: Vec<Listener>,
}

pub fn install(document: &Document) -> Ripples {
    let mut listeners = Vec::new();
    for button in select_all_in(document, ".btn-primary") {
        let Ok(button) = button.dyn_into::<HtmlElement>() else {
            continue;
        };
        let document = document.clone();
        let target = button.clone();
        listeners.extend(Listener::new(&button, "click", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                spawn(&document, &target, event);
            }
        }));
    }
    Ripples { _listeners: listeners }
}
