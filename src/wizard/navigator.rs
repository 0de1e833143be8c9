use log::{debug, info, warn};

use super::stage::{BranchId, Catalog, Container, StageId};
use super::state::{Position, WizardState};
use super::surface::Surface;

/// Drives the setup wizard: which container is on screen, which modal is
/// open and which acknowledgments are ticked.
///
/// Every operation is total. Anything that does not apply to the current
/// state returns `false` and leaves both the state and the page untouched.
pub struct Navigator<S: Surface> {
    catalog: Catalog,
    surface: S,
    state: WizardState,
    scroll_lock: Option<S::ScrollLock>,
    redirect_url: String,
}

impl<S: Surface> Navigator<S> {
    pub fn new(catalog: Catalog, surface: S, redirect_url: impl Into<String>) -> Self {
        Self {
            catalog,
            surface,
            state: WizardState::new(),
            scroll_lock: None,
            redirect_url: redirect_url.into(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Puts the page in its initial shape: only RootSelect visible, no modal
    /// open, no card selected and every checkbox cleared.
    pub fn reset_view(&mut self) {
        self.release_modal();
        for stage in self.catalog.stage_ids() {
            self.surface.set_modal_active(stage, false);
            self.surface.set_visible(Container::Stage(stage), false);
            self.surface.set_acknowledged(stage, false);
            self.surface.set_continue_enabled(stage, false);
        }
        self.surface.mark_selected(None);
        self.surface.set_visible(Container::RootSelect, true);
        self.state = WizardState::new();
    }

    /// Highlights the clicked card before the branch is entered.
    pub fn mark_choice(&self, choice: &str) -> bool {
        match self.choose(choice) {
            Some(branch) => {
                self.surface.mark_selected(Some(branch));
                true
            }
            None => false,
        }
    }

    pub fn select_branch(&mut self, choice: &str) -> bool {
        let Some(branch) = self.choose(choice) else {
            debug!("Ignoring branch choice '{}'", choice);
            return false;
        };
        info!("Selected OS: {}", branch);
        self.surface.mark_selected(Some(branch));
        self.move_to(Position::Step(StageId::new(branch, 0)), true);
        true
    }

    pub fn open_modal(&mut self, stage: StageId) -> bool {
        if !self.is_current(stage) || self.state.open_modal().is_some() {
            return false;
        }
        self.surface.set_modal_active(stage, true);
        self.scroll_lock = Some(self.surface.lock_scroll());
        self.state.set_open_modal(Some(stage));
        true
    }

    /// Close button, go-back button and overlay click all land here.
    pub fn close_modal(&mut self, stage: StageId) -> bool {
        if self.state.open_modal() != Some(stage) {
            return false;
        }
        self.release_modal();
        true
    }

    /// Escape: closes whichever modal is open.
    pub fn dismiss(&mut self) -> bool {
        match self.state.open_modal() {
            Some(stage) => self.close_modal(stage),
            None => false,
        }
    }

    pub fn toggle_acknowledgment(&mut self, stage: StageId, checked: bool) -> bool {
        if self.state.is_finished() || !self.catalog.contains(stage) {
            return false;
        }
        self.state.set_acknowledged(stage, checked);
        self.surface.set_continue_enabled(stage, checked);
        true
    }

    pub fn confirm(&mut self, stage: StageId) -> bool {
        if !self.is_current(stage) || !self.state.is_acknowledged(stage) {
            return false;
        }
        let terminal = self.catalog.is_terminal(stage);
        if !terminal && !self.can_enter(Container::Stage(stage.next())) {
            return false;
        }
        self.release_modal();
        self.clear_acknowledgment(stage);

        if terminal {
            info!("Setup finished on {}, redirecting", stage.branch);
            self.state.set_position(Position::Redirected);
            self.surface.redirect(&self.redirect_url);
        } else {
            self.move_to(Position::Step(stage.next()), true);
        }
        true
    }

    pub fn back(&mut self, stage: StageId) -> bool {
        if !self.is_current(stage) {
            return false;
        }
        let target = match stage.previous() {
            Some(previous) => Container::Stage(previous),
            None => Container::RootSelect,
        };
        if !self.can_enter(target) {
            return false;
        }
        self.release_modal();

        match stage.previous() {
            Some(previous) => {
                self.clear_acknowledgment(previous);
                self.move_to(Position::Step(previous), true);
            }
            None => {
                if let Some(branch) = self.state.branch() {
                    debug!("Leaving {} for the OS choice", branch);
                }
                self.surface.mark_selected(None);
                self.move_to(Position::RootSelect, false);
            }
        }
        true
    }

    fn choose(&self, choice: &str) -> Option<BranchId> {
        if self.state.position() != Position::RootSelect {
            return None;
        }
        BranchId::from_key(choice).filter(|branch| {
            let authored = self
                .catalog
                .branch(*branch)
                .map(|b| !b.is_empty())
                .unwrap_or(false);
            authored && self.can_enter(Container::Stage(StageId::new(*branch, 0)))
        })
    }

    fn can_enter(&self, container: Container) -> bool {
        let present = self.surface.has_container(container);
        if !present {
            warn!("{:?} is not on the page, staying put", container);
        }
        present
    }

    fn is_current(&self, stage: StageId) -> bool {
        self.state.current_stage() == Some(stage)
    }

    fn move_to(&mut self, position: Position, replay: bool) {
        if let Some(outgoing) = self.state.visible_container() {
            self.surface.set_visible(outgoing, false);
        }
        self.state.set_position(position);
        if let Some(incoming) = self.state.visible_container() {
            self.surface.set_visible(incoming, true);
            if replay {
                self.surface.replay_entrance(incoming);
            }
        }
    }

    fn release_modal(&mut self) {
        if let Some(stage) = self.state.open_modal() {
            self.surface.set_modal_active(stage, false);
            self.state.set_open_modal(None);
        }
        self.scroll_lock = None;
    }

    fn clear_acknowledgment(&mut self, stage: StageId) {
        self.state.set_acknowledged(stage, false);
        self.surface.set_acknowledged(stage, false);
        self.surface.set_continue_enabled(stage, false);
    }
}
