//! Entity records.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{PlayerClass, WeaponId};
use crate::types::{Loadout, Position};

/// The player. Not an ECS entity: the engine owns exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    /// Collision radius.
    pub size: f64,
    /// Speed before armor penalty.
    pub base_speed: f64,
    /// Movement per tick, derived from `base_speed` and armor.
    pub speed: f64,
    pub health: f64,
    pub max_health: f64,
    pub weapon: WeaponId,
    /// Fraction of incoming damage mitigated, 0.0..=ARMOR_CAP.
    pub armor: f64,
    pub metal: u32,
    pub class: PlayerClass,
    pub loadout: Loadout,
}

/// A hostile that chases the player. Paired with a `Position` on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Collision radius.
    pub size: f64,
    pub health: f64,
    pub max_health: f64,
    /// Movement per tick toward the player.
    pub speed: f64,
    pub boss: bool,
    /// Remaining poison ticks.
    pub poison: u32,
}

/// A gun projectile. Paired with `Position` and `Velocity` on the entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Ticks since the bullet was fired.
    pub age: u32,
}
