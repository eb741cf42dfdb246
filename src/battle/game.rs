use tracing::debug;

use super::encounter::{Encounter, Party, Player, PlayerId};
use super::monster::{Monster, MonsterId};
use super::moves::Move;
use super::view::{BattleControl, BattleView};

/// Battle state shared by every widget on the battle screen
#[derive(Debug, Clone, Default)]
pub struct Game {
    pub party: Party,
    pub encounter: Encounter,
    pub selected_player: Option<PlayerId>,
}

impl Game {
    pub fn new(party: Party, encounter: Encounter) -> Self {
        Game {
            party,
            encounter,
            selected_player: None,
        }
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.selected_player.and_then(|id| self.party.player(id))
    }

    pub fn selected_player_mut(&mut self) -> Option<&mut Player> {
        let id = self.selected_player?;
        self.party.player_mut(id)
    }

    /// Selects a player by id; unknown ids clear the selection
    pub fn select_player(&mut self, id: PlayerId) {
        self.selected_player = self.party.player(id).map(|p| p.id);
    }
}

impl BattleView for Game {
    type Monster = Monster;

    fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.encounter.monster(id)
    }

    fn selected_targets(&self) -> Option<&[MonsterId]> {
        self.selected_player().map(|p| p.target.as_slice())
    }

    fn selected_move(&self) -> Option<&Move> {
        self.selected_player()?.selected_move.as_ref()
    }
}

impl BattleControl for Game {
    fn is_valid_target(&self, candidates: &[MonsterId]) -> bool {
        match self.selected_move() {
            Some(mv) => {
                let others = self
                    .party
                    .players
                    .iter()
                    .filter(|p| Some(p.id) != self.selected_player);
                mv.is_valid_target(candidates, others, &self.encounter)
            }
            None => false,
        }
    }

    fn add_target(&mut self, id: MonsterId) {
        if let Some(player) = self.selected_player_mut() {
            debug!(player = %player.name, target = %id, "target added");
            player.target.push(id);
        }
    }

    fn select_move(&mut self, mv: &Move) -> bool {
        match self.selected_player_mut() {
            Some(player) => {
                debug!(player = %player.name, move_name = %mv.name, "move selected");
                player.select_move(mv.clone());
                true
            }
            None => false,
        }
    }
}
