use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, NodeList};

use crate::wizard::stage::{Catalog, Container, StageId};

pub const ROOT_SECTION_ID: &str = "setup";
pub const CARD_SELECTOR: &str = ".setup-card";
pub const CARD_LABEL_SELECTOR: &str = ".setup-select";
pub const CARD_KEY_ATTRIBUTE: &str = "data-os";

/// Element ids of one stage, derived from its `<branch>-<slug>` prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageIds {
    pub section: String,
    pub open_button: String,
    pub back_button: String,
    pub modal: String,
    pub close_button: String,
    pub go_back_button: String,
    pub continue_button: String,
    pub checkbox: String,
}

impl StageIds {
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            section: prefix.to_string(),
            open_button: format!("{}-open-modal", prefix),
            back_button: format!("{}-back", prefix),
            modal: format!("{}-modal", prefix),
            close_button: format!("{}-close-modal", prefix),
            go_back_button: format!("{}-go-back", prefix),
            continue_button: format!("{}-continue", prefix),
            checkbox: format!("{}-checkbox", prefix),
        }
    }

    pub fn for_stage(catalog: &Catalog, stage: StageId) -> Option<Self> {
        catalog.dom_prefix(stage).map(|prefix| Self::from_prefix(&prefix))
    }
}

/// Whatever of a stage's markup made it onto the page.
#[derive(Default)]
pub struct StageElements {
    pub section: Option<HtmlElement>,
    pub open_button: Option<Element>,
    pub back_button: Option<Element>,
    pub modal: Option<Element>,
    pub close_button: Option<Element>,
    pub go_back_button: Option<Element>,
    pub continue_button: Option<HtmlButtonElement>,
    pub checkbox: Option<HtmlInputElement>,
}

/// Every wizard element, looked up once when the setup page mounts.
pub struct ElementRegistry {
    document: Document,
    root: Option<HtmlElement>,
    cards: Vec<Element>,
    stages: HashMap<StageId, StageElements>,
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

fn elements(nodes: NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements matching `selector` under `scope`, in document order.
pub fn select_all(scope: &Element, selector: &str) -> Vec<Element> {
    scope.query_selector_all(selector).map(elements).unwrap_or_default()
}

/// Same as [`select_all`] but over the whole document.
pub fn select_all_in(document: &Document, selector: &str) -> Vec<Element> {
    document.query_selector_all(selector).map(elements).unwrap_or_default()
}

impl ElementRegistry {
    pub fn collect(document: &Document, catalog: &Catalog) -> Self {
        let mut stages = HashMap::new();
        for stage in catalog.stage_ids() {
            let Some(ids) = StageIds::for_stage(catalog, stage) else {
                continue;
            };
            let elements = StageElements {
                section: by_id(document, &ids.section),
                open_button: by_id(document, &ids.open_button),
                back_button: by_id(document, &ids.back_button),
                modal: by_id(document, &ids.modal),
                close_button: by_id(document, &ids.close_button),
                go_back_button: by_id(document, &ids.go_back_button),
                continue_button: by_id(document, &ids.continue_button),
                checkbox: by_id(document, &ids.checkbox),
            };
            if elements.section.is_none() {
                log::debug!("Stage section '{}' is not on this page", ids.section);
            }
            stages.insert(stage, elements);
        }

        Self {
            document: document.clone(),
            root: by_id(document, ROOT_SECTION_ID),
            cards: select_all_in(document, CARD_SELECTOR),
            stages,
        }
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    pub fn container(&self, container: Container) -> Option<&HtmlElement> {
        match container {
            Container::RootSelect => self.root.as_ref(),
            Container::Stage(stage) => self.stage(stage).and_then(|e| e.section.as_ref()),
        }
    }

    pub fn stage(&self, stage: StageId) -> Option<&StageElements> {
        self.stages.get(&stage)
    }

    pub fn stages(&self) -> impl Iterator<Item = (StageId, &StageElements)> {
        self.stages.iter().map(|(id, elements)| (*id, elements))
    }

    pub fn cards(&self) -> &[Element] {
        &self.cards
    }

    /// Nothing to drive without the OS cards.
    pub fn is_setup_page(&self) -> bool {
        !self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::stage::BranchId;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_follow_the_prefix() {
        let ids = StageIds::from_prefix("win10-runtime");
        assert_eq!(ids.section, "win10-runtime");
        assert_eq!(ids.open_button, "win10-runtime-open-modal");
        assert_eq!(ids.back_button, "win10-runtime-back");
        assert_eq!(ids.modal, "win10-runtime-modal");
        assert_eq!(ids.close_button, "win10-runtime-close-modal");
        assert_eq!(ids.go_back_button, "win10-runtime-go-back");
        assert_eq!(ids.continue_button, "win10-runtime-continue");
        assert_eq!(ids.checkbox, "win10-runtime-checkbox");
    }

    #[test]
    fn ids_are_unique_across_the_catalog() {
        let catalog = Catalog::bundled();
        let sections: std::collections::HashSet<String> = catalog
            .stage_ids()
            .filter_map(|stage| StageIds::for_stage(&catalog, stage))
            .map(|ids| ids.section)
            .collect();
        assert_eq!(sections.len(), catalog.stage_ids().count());
        assert!(StageIds::for_stage(&catalog, StageId::new(BranchId::Windows10, 4)).is_none());
    }
}
