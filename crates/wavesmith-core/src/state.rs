//! Game state snapshot: the complete visible state handed to the presentation
//! layer after each tick.

use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::Position;

/// Complete read-only view of the simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub tick: u64,
    pub wave: u32,
    pub phase: WavePhase,
    pub grace_timer: u32,
    pub paused: bool,
    pub dead: bool,
    pub player: PlayerView,
    pub monsters: Vec<MonsterView>,
    pub bullets: Vec<BulletView>,
    pub hud: HudView,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub size: f64,
    pub health: f64,
    pub max_health: f64,
    pub weapon: WeaponId,
    pub armor: f64,
    pub metal: u32,
    pub speed: f64,
    pub class: PlayerClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterView {
    pub position: Position,
    pub size: f64,
    pub health: f64,
    pub max_health: f64,
    pub boss: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
}

/// Preformatted HUD strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    /// e.g. `Wave: 3 | Grace 4:59`.
    pub info: String,
    pub metal: String,
    /// Weapon name, damage, armor percent and speed, one per line.
    pub weapon_stats: String,
    pub class_label: String,
    /// Player health as a fraction of max, for the health bar.
    pub health_fraction: f64,
}

/// `Grace m:ss` while the timer runs, `Fighting` otherwise.
pub fn phase_label(phase: WavePhase, grace_timer: u32) -> String {
    match phase {
        WavePhase::Grace => {
            let per_minute = TICK_RATE * 60;
            let minutes = grace_timer / per_minute;
            let seconds = (grace_timer / TICK_RATE) % 60;
            format!("Grace {minutes}:{seconds:02}")
        }
        WavePhase::Fighting => "Fighting".to_string(),
    }
}

pub fn weapon_stats_label(weapon: WeaponId, damage: f64, armor: f64, speed: f64) -> String {
    let armor_pct = (armor * 100.0).floor() as i64;
    format!(
        "{}\nDamage: {}\nArmor: {}%\nSpeed: {:.2}",
        weapon.name().to_uppercase(),
        damage,
        armor_pct,
        speed
    )
}
