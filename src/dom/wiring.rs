use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, KeyboardEvent, Window};

use super::listener::Listener;
use super::registry::{ElementRegistry, CARD_KEY_ATTRIBUTE};
use super::surface::DomSurface;
use crate::config;
use crate::wizard::navigator::Navigator;
use crate::wizard::stage::{Catalog, StageId};

type SharedNavigator = Rc<RefCell<Navigator<DomSurface>>>;

/// Keeps the setup wizard alive. Dropping it unbinds every listener and
/// cancels a pending branch reveal.
pub struct WizardHandle {
    _navigator: SharedNavigator,
    _listeners: Vec<Listener>,
    _pending_reveal: Rc<RefCell<Option<Timeout>>>,
}

fn with_navigator(navigator: &SharedNavigator, f: impl FnOnce(&mut Navigator<DomSurface>)) {
    match navigator.try_borrow_mut() {
        Ok(mut navigator) => f(&mut navigator),
        Err(_) => debug!("Navigator busy, dropping event"),
    }
}

fn as_target(element: Option<&Element>) -> Option<&EventTarget> {
    element.map(|e| e.unchecked_ref::<EventTarget>())
}

/// Looks up the wizard markup, resets it to the OS selection screen and
/// binds every button, checkbox and the Escape key. Returns `None` when the
/// document has no OS cards.
pub fn mount(window: &Window, document: &Document, catalog: Catalog) -> Option<WizardHandle> {
    let registry = Rc::new(ElementRegistry::collect(document, &catalog));
    if !registry.is_setup_page() {
        debug!("No setup cards on this page, wizard not mounted");
        return None;
    }

    let surface = DomSurface::new(registry.clone(), window.clone());
    let mut navigator = Navigator::new(catalog, surface, config::get_redirect_url());
    navigator.reset_view();
    let navigator: SharedNavigator = Rc::new(RefCell::new(navigator));

    let pending_reveal: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let mut listeners = Vec::new();

    for card in registry.cards() {
        let Some(choice) = card.get_attribute(CARD_KEY_ATTRIBUTE) else {
            continue;
        };
        let navigator = navigator.clone();
        let pending_reveal = pending_reveal.clone();
        listeners.extend(Listener::new(card, "click", move |_| {
            with_navigator(&navigator, |nav| {
                nav.mark_choice(&choice);
            });
            let navigator = navigator.clone();
            let choice = choice.clone();
            // A newer click replaces the reveal still waiting.
            *pending_reveal.borrow_mut() = Some(Timeout::new(config::BRANCH_REVEAL_DELAY_MS, move || {
                with_navigator(&navigator, |nav| {
                    nav.select_branch(&choice);
                });
            }));
        }));
    }

    for (stage, elements) in registry.stages() {
        let bind = |target: Option<&EventTarget>, action: fn(&mut Navigator<DomSurface>, StageId) -> bool| {
            let target = target?;
            let navigator = navigator.clone();
            Listener::new(target, "click", move |_| {
                with_navigator(&navigator, |nav| {
                    action(nav, stage);
                });
            })
        };

        listeners.extend(bind(as_target(elements.open_button.as_ref()), Navigator::open_modal));
        listeners.extend(bind(as_target(elements.close_button.as_ref()), Navigator::close_modal));
        listeners.extend(bind(as_target(elements.go_back_button.as_ref()), Navigator::close_modal));
        listeners.extend(bind(as_target(elements.back_button.as_ref()), Navigator::back));
        listeners.extend(bind(
            elements.continue_button.as_ref().map(|b| b.unchecked_ref::<EventTarget>()),
            Navigator::confirm,
        ));

        if let Some(modal) = &elements.modal {
            let overlay: EventTarget = modal.clone().into();
            let navigator = navigator.clone();
            listeners.extend(Listener::new(modal, "click", move |event: Event| {
                // Only clicks on the backdrop itself, not inside the dialog.
                if event.target().as_ref() == Some(&overlay) {
                    with_navigator(&navigator, |nav| {
                        nav.close_modal(stage);
                    });
                }
            }));
        }

        if let Some(checkbox) = &elements.checkbox {
            let navigator = navigator.clone();
            listeners.extend(Listener::new(checkbox, "change", move |event: Event| {
                let checked = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.checked())
                    .unwrap_or(false);
                with_navigator(&navigator, |nav| {
                    nav.toggle_acknowledgment(stage, checked);
                });
            }));
        }
    }

    {
        let navigator = navigator.clone();
        listeners.extend(Listener::new(document, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| key.key() == "Escape")
                .unwrap_or(false);
            if is_escape {
                with_navigator(&navigator, |nav| {
                    nav.dismiss();
                });
            }
        }));
    }

    info!("Setup wizard mounted with {} listeners", listeners.len());
    Some(WizardHandle {
        _navigator: navigator,
        _listeners: listeners,
        _pending_reveal: pending_reveal,
    })
}
