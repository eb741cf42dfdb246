//! Monster stats and health
//!
//! - `Health` tracks current against maximum hit points
//! - `StatKind` names the stats a monster has
//! - `StatBlock` holds the base values read by the UI bars

use serde::{Deserialize, Serialize};

/// A creature's hit points
///
/// # Example
///
/// ```ignore
/// let mut health = Health::new(40);
/// health.take_damage(10);
/// assert_eq!(health.current(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Creates health at full
    pub fn new(max: u32) -> Self {
        Health { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Health as 0.0-1.0, or 0.0 when max is zero
    pub fn percentage(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }

    /// Applies damage, flooring at zero
    pub fn take_damage(&mut self, amount: u32) -> DamageResult {
        let old = self.current;
        self.current = self.current.saturating_sub(amount);

        DamageResult {
            damage_dealt: old - self.current,
            is_fatal: old > 0 && self.current == 0,
            overkill: amount.saturating_sub(old),
        }
    }

    /// Heals up to max and returns the amount actually restored
    pub fn heal(&mut self, amount: u32) -> u32 {
        let old = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current - old
    }
}

/// Outcome of [`Health::take_damage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageResult {
    pub damage_dealt: u32,
    /// True only for the hit that brought health to zero
    pub is_fatal: bool,
    pub overkill: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Health,
    Action,
    Attack,
    Defense,
    Speed,
}

/// Base stat values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: u32,
    pub action: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub speed: u32,
}

impl StatBlock {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Action => self.action,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100);
        let result = health.take_damage(30);

        assert_eq!(result.damage_dealt, 30);
        assert_eq!(health.current(), 70);
        assert!(!result.is_fatal);
        assert_eq!(result.overkill, 0);
    }

    #[test]
    fn test_health_fatal_damage() {
        let mut health = Health::new(100);
        let result = health.take_damage(150);

        assert_eq!(result.damage_dealt, 100);
        assert_eq!(health.current(), 0);
        assert!(result.is_fatal);
        assert_eq!(result.overkill, 50);

        let again = health.take_damage(5);
        assert!(!again.is_fatal);
        assert_eq!(again.damage_dealt, 0);
    }

    #[test]
    fn test_health_overheal_caps() {
        let mut health = Health::new(100);
        health.take_damage(50);

        assert_eq!(health.heal(100), 50);
        assert_eq!(health.current(), 100);
    }

    #[test]
    fn test_health_percentage() {
        let mut health = Health::new(100);
        health.take_damage(25);
        assert_eq!(health.percentage(), 0.75);
        assert_eq!(Health::new(0).percentage(), 0.0);
    }

    #[test]
    fn test_stat_lookup() {
        let stats = StatBlock {
            health: 40,
            action: 10,
            attack: 7,
            defense: 3,
            speed: 5,
        };
        assert_eq!(stats.get(StatKind::Health), 40);
        assert_eq!(stats.get(StatKind::Action), 10);
        assert_eq!(stats.get(StatKind::Speed), 5);
    }
}
