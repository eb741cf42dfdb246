use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::stats::{DamageResult, Health, StatBlock, StatKind};
use super::view::MonsterStatus;

/// Stable identifier of a monster within a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which sprite variant to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicKind {
    Neutral,
    Hover,
}

/// Sprite paths for a monster; either may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphics {
    #[serde(default)]
    pub neutral: Option<PathBuf>,
    #[serde(default)]
    pub hover: Option<PathBuf>,
}

impl Graphics {
    pub fn get(&self, kind: GraphicKind) -> Option<&Path> {
        match kind {
            GraphicKind::Neutral => self.neutral.as_deref(),
            GraphicKind::Hover => self.hover.as_deref(),
        }
    }
}

/// Monster definition as written in a battle setup file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterDef {
    pub id: MonsterId,
    pub name: String,
    #[serde(default)]
    pub graphic: Graphics,
    pub stats: StatBlock,
}

#[derive(Debug, Clone)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub graphic: Graphics,
    pub stats: StatBlock,
    health: Health,
    action: u32,
    pub fallen: bool,
}

impl Monster {
    /// Full health, empty action charge
    pub fn new(id: MonsterId, name: impl Into<String>, graphic: Graphics, stats: StatBlock) -> Self {
        let health = Health::new(stats.health);
        Monster {
            id,
            name: name.into(),
            graphic,
            stats,
            health,
            action: 0,
            fallen: false,
        }
    }

    pub fn from_def(def: MonsterDef) -> Self {
        Monster::new(def.id, def.name, def.graphic, def.stats)
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    /// Applies damage and marks the monster fallen when health runs out
    pub fn apply_damage(&mut self, amount: u32) -> DamageResult {
        let result = self.health.take_damage(amount);
        if result.is_fatal {
            self.fallen = true;
            info!(monster = %self.name, id = %self.id, "monster has fallen");
        }
        result
    }

    /// Raises action charge, capped at the action stat
    pub fn charge(&mut self, amount: u32) {
        self.action = self.action.saturating_add(amount).min(self.stats.action);
    }

    /// Spends all action charge
    pub fn reset_action(&mut self) {
        self.action = 0;
    }
}

impl MonsterStatus for Monster {
    fn name(&self) -> &str {
        &self.name
    }

    fn graphic(&self, kind: GraphicKind) -> Option<&Path> {
        self.graphic.get(kind)
    }

    fn current_health(&self) -> u32 {
        self.health.current()
    }

    fn current_action(&self) -> u32 {
        self.action
    }

    fn stat(&self, kind: StatKind) -> u32 {
        self.stats.get(kind)
    }

    fn is_fallen(&self) -> bool {
        self.fallen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Monster {
        let stats = StatBlock {
            health: 20,
            action: 10,
            attack: 4,
            defense: 1,
            speed: 6,
        };
        Monster::new(MonsterId(1), "goblin", Graphics::default(), stats)
    }

    #[test]
    fn test_new_monster_is_fresh() {
        let monster = goblin();
        assert_eq!(monster.current_health(), 20);
        assert_eq!(monster.current_action(), 0);
        assert!(!monster.is_fallen());
    }

    #[test]
    fn test_lethal_damage_marks_fallen() {
        let mut monster = goblin();
        monster.apply_damage(5);
        assert!(!monster.fallen);

        let result = monster.apply_damage(50);
        assert!(result.is_fatal);
        assert!(monster.fallen);
        assert_eq!(monster.current_health(), 0);
    }

    #[test]
    fn test_charge_caps_at_action_stat() {
        let mut monster = goblin();
        monster.charge(4);
        assert_eq!(monster.action(), 4);
        monster.charge(100);
        assert_eq!(monster.action(), 10);
        monster.reset_action();
        assert_eq!(monster.action(), 0);
    }

    #[test]
    fn test_graphics_lookup() {
        let graphics = Graphics {
            neutral: Some(PathBuf::from("a.png")),
            hover: None,
        };
        assert_eq!(graphics.get(GraphicKind::Neutral), Some(Path::new("a.png")));
        assert_eq!(graphics.get(GraphicKind::Hover), None);
    }
}
