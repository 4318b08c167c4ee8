//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Held keys
//! (movement, melee) are not commands; they travel in `InputState`.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// All discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Combat ---
    /// Equip a weapon, subject to the swap cooldown.
    SwitchWeapon { weapon: WeaponId },
    /// Fire the gun toward a point on the field.
    Fire { target: Position },

    // --- Grace phase ---
    /// Spend metal at the forge.
    Forge { item: ForgeItem },
    /// Pick a class. Only during grace, once per life.
    ChooseClass { class: PlayerClass },
    /// End the grace window early and start the wave.
    SkipGrace,

    // --- Session ---
    TogglePause,
    /// Start over from the initial state.
    Restart,
    /// Replace the session with the contents of a save code.
    LoadSave { code: String },
}

impl PlayerCommand {
    /// Map a key press to its edge-triggered command, if it has one.
    pub fn from_key_press(key: &str) -> Option<Self> {
        match key {
            "p" | "P" => Some(PlayerCommand::TogglePause),
            "1" => Some(PlayerCommand::SwitchWeapon {
                weapon: WeaponId::Sword,
            }),
            "2" => Some(PlayerCommand::SwitchWeapon {
                weapon: WeaponId::Gun,
            }),
            _ => None,
        }
    }
}
