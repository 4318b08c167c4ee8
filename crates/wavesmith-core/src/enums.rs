//! Enumeration types used throughout the simulation.
//!
//! Serialized names follow the save-code format, so renaming a variant is a
//! save-compatibility change.

use serde::{Deserialize, Serialize};

/// Weapon the player can hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponId {
    #[default]
    Sword,
    Gun,
}

/// Player class, chosen at most once per life during grace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerClass {
    #[default]
    #[serde(rename = "None", alias = "none")]
    None,
    Tank,
    Assassin,
    Gunner,
    Berserker,
}

/// Wave lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Pre-wave window: no monsters, health regenerates, shopping allowed.
    #[default]
    Grace,
    /// Active wave; ends when every monster is dead.
    Fighting,
}

/// Things the forge can make in exchange for metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForgeItem {
    Sword,
    Gun,
    Armor,
}

impl WeaponId {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponId::Sword => "sword",
            WeaponId::Gun => "gun",
        }
    }
}

impl PlayerClass {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::None => "none",
            PlayerClass::Tank => "tank",
            PlayerClass::Assassin => "assassin",
            PlayerClass::Gunner => "gunner",
            PlayerClass::Berserker => "berserker",
        }
    }
}
