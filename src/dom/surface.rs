use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::registry::{select_all, ElementRegistry, CARD_KEY_ATTRIBUTE, CARD_LABEL_SELECTOR};
use crate::wizard::stage::{BranchId, Container, StageId};
use crate::wizard::surface::Surface;

/// Children of a container whose CSS entrance animation restarts on entry.
const ANIMATED_SELECTOR: &str = ".step-card, .stage-card, .stage-points, .steps-actions";

/// Keeps `body` from scrolling until dropped.
pub struct BodyScrollLock {
    body: Option<HtmlElement>,
}

impl BodyScrollLock {
    pub fn acquire(body: Option<HtmlElement>) -> Self {
        if let Some(body) = &body {
            let _ = body.style().set_property("overflow", "hidden");
        }
        Self { body }
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        if let Some(body) = &self.body {
            let _ = body.style().remove_property("overflow");
        }
    }
}

/// [`Surface`] over the live document.
pub struct DomSurface {
    registry: Rc<ElementRegistry>,
    window: Window,
}

impl DomSurface {
    pub fn new(registry: Rc<ElementRegistry>, window: Window) -> Self {
        Self { registry, window }
    }
}

impl Surface for DomSurface {
    type ScrollLock = BodyScrollLock;

    fn has_container(&self, container: Container) -> bool {
        self.registry.container(container).is_some()
    }

    fn set_visible(&self, container: Container, visible: bool) {
        if let Some(section) = self.registry.container(container) {
            let display = if visible { "flex" } else { "none" };
            let _ = section.style().set_property("display", display);
        }
    }

    fn set_modal_active(&self, stage: StageId, active: bool) {
        if let Some(modal) = self.registry.stage(stage).and_then(|e| e.modal.as_ref()) {
            let _ = modal.class_list().toggle_with_force("active", active);
        }
    }

    fn set_acknowledged(&self, stage: StageId, checked: bool) {
        if let Some(checkbox) = self.registry.stage(stage).and_then(|e| e.checkbox.as_ref()) {
            checkbox.set_checked(checked);
        }
    }

    fn set_continue_enabled(&self, stage: StageId, enabled: bool) {
        if let Some(button) = self.registry.stage(stage).and_then(|e| e.continue_button.as_ref()) {
            button.set_disabled(!enabled);
        }
    }

    fn mark_selected(&self, branch: Option<BranchId>) {
        for card in self.registry.cards() {
            let key = card.get_attribute(CARD_KEY_ATTRIBUTE);
            let selected = branch.is_some_and(|b| key.as_deref() == Some(b.key()));
            let _ = card.class_list().toggle_with_force("selected", selected);
            if let Ok(Some(label)) = card.query_selector(CARD_LABEL_SELECTOR) {
                label.set_text_content(Some(if selected { "Selected" } else { "Select" }));
            }
        }
    }

    fn lock_scroll(&self) -> BodyScrollLock {
        BodyScrollLock::acquire(self.registry.body())
    }

    fn replay_entrance(&self, container: Container) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);

        let Some(section) = self.registry.container(container) else {
            return;
        };
        for element in select_all(section, ANIMATED_SELECTOR) {
            if let Ok(element) = element.dyn_into::<HtmlElement>() {
                let style = element.style();
                let _ = style.set_property("animation", "none");
                // Reading layout forces a reflow so the animation restarts.
                let _ = element.offset_height();
                let _ = style.remove_property("animation");
            }
        }
    }

    fn redirect(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            log::error!("Redirect to {} failed: {:?}", url, e);
        }
    }
}
