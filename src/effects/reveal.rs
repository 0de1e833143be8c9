use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;
use crate::dom::registry::select_all_in;

const REVEAL_SELECTOR: &str = ".feature-card, .status-card, .section-header";
const STAGGERED_GRIDS: [&str; 2] = ["features-grid", "status-grid"];

/// Transition delay of the `index`th card in a grid.
pub fn stagger_delay(index: u32) -> String {
    format!("{:.1}s", index as f64 / 10.0)
}

/// Fades cards in the first time they scroll into view.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn grid_index(target: &Element) -> Option<u32> {
    let parent = target.parent_element()?;
    let class_list = parent.class_list();
    if !STAGGERED_GRIDS.iter().any(|grid| class_list.contains(grid)) {
        return None;
    }
    let siblings = parent.children();
    (0..siblings.length()).find(|&i| siblings.item(i).as_ref() == Some(target))
}

fn on_intersect(entries: Array, observer: IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        if !entry.is_intersecting() {
            continue;
        }
        let target = entry.target();
        if let Some(index) = grid_index(&target) {
            if let Some(html) = target.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("transition-delay", &stagger_delay(index));
            }
        }
        let _ = target.class_list().add_1("visible");
        observer.unobserve(&target);
    }
}

pub fn install(document: &Document) -> Option<Reveal> {
    let elements = select_all_in(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return None;
    }
    for element in &elements {
        let _ = element.class_list().add_1("fade-in");
    }

    let callback = Closure::wrap(Box::new(on_intersect) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            // Without an observer nothing would ever become visible.
            for element in &elements {
                let _ = element.class_list().add_1("visible");
            }
            return None;
        }
    };
    for element in &elements {
        observer.observe(element);
    }
    Some(Reveal {
        observer,
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
        assert_eq!(stagger_delay(12), "1.2s");
    }
}
