use super::stage::{BranchId, Container, StageId};

/// Everything the navigator does to the page goes through here.
///
/// Implementations must tolerate targets that do not exist; a missing
/// element simply makes the call a no-op.
pub trait Surface {
    /// Held while a modal is open. Dropping it restores page scrolling.
    type ScrollLock;

    /// Whether `container` is on the page at all. The navigator never moves
    /// into a container that is missing.
    fn has_container(&self, container: Container) -> bool;

    fn set_visible(&self, container: Container, visible: bool);

    fn set_modal_active(&self, stage: StageId, active: bool);

    /// Mirrors the acknowledgment flag into the checkbox.
    fn set_acknowledged(&self, stage: StageId, checked: bool);

    fn set_continue_enabled(&self, stage: StageId, enabled: bool);

    /// Marks one branch card as selected, or clears every marker on `None`.
    fn mark_selected(&self, branch: Option<BranchId>);

    fn lock_scroll(&self) -> Self::ScrollLock;

    /// Scrolls to the top and restarts the entrance animation of `container`.
    fn replay_entrance(&self, container: Container);

    fn redirect(&self, url: &str);
}
