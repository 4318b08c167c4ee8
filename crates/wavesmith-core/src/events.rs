//! Events emitted by the simulation for HUD and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Grace ended and a wave spawned.
    WaveStarted { wave: u32, regulars: u32, boss: bool },
    /// The last monster of a wave died; grace begins.
    WaveCleared { wave: u32 },
    MonsterKilled { boss: bool, metal_awarded: u32 },
    PlayerDied { wave: u32 },
    WeaponSwitched { weapon: WeaponId },
    Forged { item: ForgeItem },
    ClassChosen { class: PlayerClass },
    Paused,
    Resumed,
    Restarted,
    SaveLoaded { wave: u32 },
}
