use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::encounter::{Encounter, Player};
use super::monster::MonsterId;

/// How many and which monsters a move may be aimed at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetRule {
    pub max_targets: usize,
    /// Monsters already targeted by another party member are off limits
    pub exclusive: bool,
}

impl TargetRule {
    pub fn up_to(max_targets: usize) -> Self {
        TargetRule {
            max_targets,
            exclusive: false,
        }
    }

    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

impl Default for TargetRule {
    fn default() -> Self {
        TargetRule::up_to(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(default)]
    pub icon: Option<PathBuf>,
    #[serde(default)]
    pub targeting: TargetRule,
}

impl Move {
    pub fn new(name: impl Into<String>, targeting: TargetRule) -> Self {
        Move {
            name: name.into(),
            icon: None,
            targeting,
        }
    }

    /// Whether `candidates` is an acceptable target list for this move
    ///
    /// The list must be non-empty, within `max_targets`, contain no
    /// duplicates, and name only standing monsters of the encounter.
    /// `players` are the other party members; an exclusive move also
    /// rejects monsters any of them has already targeted.
    pub fn is_valid_target<'p>(
        &self,
        candidates: &[MonsterId],
        players: impl IntoIterator<Item = &'p Player>,
        encounter: &Encounter,
    ) -> bool {
        if candidates.is_empty() || candidates.len() > self.targeting.max_targets {
            return false;
        }

        let claimed: HashSet<MonsterId> = if self.targeting.exclusive {
            players
                .into_iter()
                .flat_map(|player| player.target.iter().copied())
                .collect()
        } else {
            HashSet::new()
        };

        let mut seen = HashSet::with_capacity(candidates.len());
        candidates.iter().all(|id| {
            seen.insert(*id)
                && !claimed.contains(id)
                && encounter
                    .monster(*id)
                    .is_some_and(|monster| !monster.fallen)
        })
    }
}
