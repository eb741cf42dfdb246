use serde::{Deserialize, Serialize};

use super::monster::{Monster, MonsterId};
use super::moves::Move;

/// The monsters on the enemy side of a battle, in display order
#[derive(Debug, Clone, Default)]
pub struct Encounter {
    pub monsters: Vec<Monster>,
}

impl Encounter {
    pub fn new(monsters: Vec<Monster>) -> Self {
        Encounter { monsters }
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id == id)
    }

    /// True once every monster has fallen
    pub fn is_cleared(&self) -> bool {
        self.monsters.iter().all(|m| m.fallen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// A party member choosing a move and its targets
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub selected_move: Option<Move>,
    pub target: Vec<MonsterId>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            selected_move: None,
            target: Vec::new(),
        }
    }

    /// Picks a move and drops targets chosen for the previous one
    pub fn select_move(&mut self, mv: Move) {
        self.selected_move = Some(mv);
        self.target.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct Party {
    pub players: Vec<Player>,
}

impl Party {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }
}
