//! Capability traits the UI reads game state through
//!
//! Widgets never see the concrete game struct. [`BattleView`] exposes the
//! read-only fields a frame needs; [`BattleControl`] adds the few mutations
//! and the move predicate that clicks are allowed to trigger.

use std::path::Path;

use super::monster::{GraphicKind, MonsterId};
use super::moves::Move;
use super::stats::StatKind;

/// What a widget may read about one monster
pub trait MonsterStatus {
    fn name(&self) -> &str;
    fn graphic(&self, kind: GraphicKind) -> Option<&Path>;
    fn current_health(&self) -> u32;
    fn current_action(&self) -> u32;
    fn stat(&self, kind: StatKind) -> u32;
    fn is_fallen(&self) -> bool;
}

/// Read-only view of the battle for per-frame update and render
pub trait BattleView {
    type Monster: MonsterStatus;

    fn monster(&self, id: MonsterId) -> Option<&Self::Monster>;

    /// Targets of the selected player, or `None` when no player is selected
    fn selected_targets(&self) -> Option<&[MonsterId]>;

    /// Move chosen by the selected player, if any
    fn selected_move(&self) -> Option<&Move>;
}

/// Mutations a click may perform
pub trait BattleControl: BattleView {
    /// Asks the selected move whether `candidates` is an acceptable target list
    ///
    /// The move also sees the other party members' targets. False when no
    /// player or no move is selected.
    fn is_valid_target(&self, candidates: &[MonsterId]) -> bool;

    /// Appends a target for the selected player; ignored without one
    fn add_target(&mut self, id: MonsterId);

    /// Selects a move for the selected player; false without one
    fn select_move(&mut self, mv: &Move) -> bool;
}
