//! Battle setup files
//!
//! A setup file lists the party, the monsters of the encounter and the moves
//! offered on the battle screen:
//!
//! ```json
//! {
//!   "party": [{ "id": 1, "name": "Ayla" }],
//!   "monsters": [{ "id": 1, "name": "slime", "stats": { "health": 12, "action": 60 } }],
//!   "moves": [{ "name": "slash", "targeting": { "max_targets": 1 } }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::encounter::{Encounter, Party, Player, PlayerId};
use super::game::Game;
use super::monster::{Monster, MonsterDef};
use super::moves::Move;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSetup {
    #[serde(default)]
    pub party: Vec<PlayerDef>,
    #[serde(default)]
    pub monsters: Vec<MonsterDef>,
    #[serde(default)]
    pub moves: Vec<Move>,
}

impl BattleSetup {
    pub fn from_json(path: &Path, raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let setup = Self::from_json(path, &raw)?;
        info!(
            path = %path.display(),
            players = setup.party.len(),
            monsters = setup.monsters.len(),
            moves = setup.moves.len(),
            "battle setup loaded"
        );
        Ok(setup)
    }

    /// Builds the game state; monsters start at full health with no action charge
    pub fn to_game(&self) -> Game {
        let party = Party {
            players: self
                .party
                .iter()
                .map(|p| Player::new(p.id, p.name.clone()))
                .collect(),
        };
        let encounter = Encounter::new(
            self.monsters
                .iter()
                .cloned()
                .map(Monster::from_def)
                .collect(),
        );
        Game::new(party, encounter)
    }
}
