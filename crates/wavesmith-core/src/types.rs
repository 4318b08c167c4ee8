//! Fundamental geometric, timing, and weapon types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{GUN_DAMAGE, GUN_RANGE, SWORD_DAMAGE, SWORD_RANGE, TICK_RATE};
use crate::enums::WeaponId;

/// 2D position on the play field (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Per-tick displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each unpaused tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance between centers.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Damage and reach of one weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub damage: f64,
    pub range: f64,
}

/// The weapon stats a player fights with. Built once when a class is picked
/// and never shared between players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub sword: WeaponStats,
    pub gun: WeaponStats,
}

impl Default for Loadout {
    fn default() -> Self {
        Self {
            sword: WeaponStats {
                damage: SWORD_DAMAGE,
                range: SWORD_RANGE,
            },
            gun: WeaponStats {
                damage: GUN_DAMAGE,
                range: GUN_RANGE,
            },
        }
    }
}

impl Loadout {
    pub fn stats(&self, weapon: WeaponId) -> WeaponStats {
        match weapon {
            WeaponId::Sword => self.sword,
            WeaponId::Gun => self.gun,
        }
    }
}
