//! Battle model
//!
//! The minimal game state the battle screen renders: monsters and their
//! stats, the party choosing moves and targets, and the capability traits
//! through which widgets see all of it.

pub mod encounter;
pub mod game;
pub mod monster;
pub mod moves;
pub mod setup;
pub mod stats;
pub mod view;

pub use encounter::{Encounter, Party, Player, PlayerId};
pub use game::Game;
pub use monster::{GraphicKind, Graphics, Monster, MonsterDef, MonsterId};
pub use moves::{Move, TargetRule};
pub use setup::BattleSetup;
pub use stats::{DamageResult, Health, StatBlock, StatKind};
pub use view::{BattleControl, BattleView, MonsterStatus};
