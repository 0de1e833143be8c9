use std::collections::BTreeSet;

use super::stage::{BranchId, Container, StageId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    RootSelect,
    Step(StageId),
    /// The terminal confirm sent the browser elsewhere. Nothing follows.
    Redirected,
}

/// The wizard's only mutable record. Owned by the navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    position: Position,
    open_modal: Option<StageId>,
    acknowledged: BTreeSet<StageId>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            position: Position::RootSelect,
            open_modal: None,
            acknowledged: BTreeSet::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn current_stage(&self) -> Option<StageId> {
        match self.position {
            Position::Step(stage) => Some(stage),
            _ => None,
        }
    }

    /// The branch picked at RootSelect, while inside it.
    pub fn branch(&self) -> Option<BranchId> {
        self.current_stage().map(|stage| stage.branch)
    }

    pub fn open_modal(&self) -> Option<StageId> {
        self.open_modal
    }

    pub fn is_acknowledged(&self, stage: StageId) -> bool {
        self.acknowledged.contains(&stage)
    }

    /// Container that should be on screen; `None` once redirected.
    pub fn visible_container(&self) -> Option<Container> {
        match self.position {
            Position::RootSelect => Some(Container::RootSelect),
            Position::Step(stage) => Some(Container::Stage(stage)),
            Position::Redirected => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position == Position::Redirected
    }

    pub(super) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(super) fn set_open_modal(&mut self, stage: Option<StageId>) {
        self.open_modal = stage;
    }

    pub(super) fn set_acknowledged(&mut self, stage: StageId, checked: bool) {
        if checked {
            self.acknowledged.insert(stage);
        } else {
            self.acknowledged.remove(&stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root_with_nothing_open() {
        let state = WizardState::new();
        assert_eq!(state.position(), Position::RootSelect);
        assert_eq!(state.visible_container(), Some(Container::RootSelect));
        assert_eq!(state.branch(), None);
        assert_eq!(state.open_modal(), None);
        assert!(!state.is_finished());
    }

    #[test]
    fn acknowledgment_flags_are_per_stage() {
        let mut state = WizardState::new();
        let a = StageId::new(BranchId::Windows11, 0);
        let b = StageId::new(BranchId::Windows10, 0);
        state.set_acknowledged(a, true);
        assert!(state.is_acknowledged(a));
        assert!(!state.is_acknowledged(b));
        state.set_acknowledged(a, false);
        assert!(!state.is_acknowledged(a));
    }

    #[test]
    fn redirected_has_no_visible_container() {
        let mut state = WizardState::new();
        state.set_position(Position::Redirected);
        assert_eq!(state.visible_container(), None);
        assert!(state.is_finished());
    }
}
