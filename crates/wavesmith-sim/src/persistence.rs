//! Save codes: the whole mutable session as one printable token.
//!
//! The token is compact JSON (camelCase field names) wrapped in standard
//! Base64. Bullets are transient and never saved.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hecs::World;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wavesmith_core::components::{Monster, Player};
use wavesmith_core::constants::{ARMOR_CAP, MAX_WAVE, PLAYER_SIZE};
use wavesmith_core::enums::{PlayerClass, WavePhase, WeaponId};
use wavesmith_core::types::Position;

use crate::armory;
use crate::wave::WaveState;
use crate::world_setup;

#[derive(Debug, Error)]
pub enum SaveCodeError {
    #[error("save code is empty")]
    Empty,
    #[error("save code is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("save code does not contain text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("save data is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save data field `{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Everything needed to resume a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub player: SavedPlayer,
    pub player_class: PlayerClass,
    pub wave: u32,
    /// True while in the grace phase.
    pub grace_time: bool,
    pub grace_timer: u32,
    pub monsters: Vec<SavedMonster>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlayer {
    pub x: f64,
    pub y: f64,
    pub health: f64,
    pub max_health: f64,
    pub weapon: WeaponId,
    pub armor: f64,
    pub metal: u32,
    pub base_speed: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMonster {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
    pub boss: bool,
    pub poison: u32,
}

impl SaveData {
    /// Capture the persisted parts of a session. Monsters keep world order.
    pub fn capture(player: &Player, wave: &WaveState, world: &World) -> Self {
        let monsters = world
            .query::<(&Position, &Monster)>()
            .iter()
            .map(|(_, (pos, m))| SavedMonster {
                x: pos.x,
                y: pos.y,
                size: m.size,
                health: m.health,
                max_health: m.max_health,
                speed: m.speed,
                boss: m.boss,
                poison: m.poison,
            })
            .collect();

        Self {
            player: SavedPlayer {
                x: player.position.x,
                y: player.position.y,
                health: player.health,
                max_health: player.max_health,
                weapon: player.weapon,
                armor: player.armor,
                metal: player.metal,
                base_speed: player.base_speed,
                speed: player.speed,
            },
            player_class: player.class,
            wave: wave.wave,
            grace_time: wave.phase == WavePhase::Grace,
            grace_timer: wave.grace_timer,
            monsters,
        }
    }

    /// Rebuild the player record. The loadout is derived from the class.
    pub fn restore_player(&self) -> Player {
        let p = &self.player;
        Player {
            position: Position::new(p.x, p.y),
            size: PLAYER_SIZE,
            base_speed: p.base_speed,
            speed: p.speed,
            health: p.health,
            max_health: p.max_health,
            weapon: p.weapon,
            armor: p.armor,
            metal: p.metal,
            class: self.player_class,
            loadout: armory::loadout_for(self.player_class),
        }
    }

    pub fn restore_wave(&self) -> WaveState {
        WaveState {
            wave: self.wave,
            phase: if self.grace_time {
                WavePhase::Grace
            } else {
                WavePhase::Fighting
            },
            grace_timer: self.grace_timer,
        }
    }

    /// Build a fresh world holding the saved monsters, in saved order.
    pub fn restore_world(&self) -> World {
        let mut world = World::new();
        for m in &self.monsters {
            world_setup::spawn_monster_at(
                &mut world,
                Position::new(m.x, m.y),
                Monster {
                    size: m.size,
                    health: m.health,
                    max_health: m.max_health,
                    speed: m.speed,
                    boss: m.boss,
                    poison: m.poison,
                },
            );
        }
        world
    }

    /// Reject values the simulation could never have produced.
    pub fn validate(&self) -> Result<(), SaveCodeError> {
        let p = &self.player;
        finite("player.x", p.x)?;
        finite("player.y", p.y)?;
        finite("player.baseSpeed", p.base_speed)?;
        finite("player.speed", p.speed)?;
        if !(p.max_health.is_finite() && p.max_health > 0.0) {
            return Err(invalid("player.maxHealth", "must be positive"));
        }
        if !(p.health.is_finite() && (0.0..=p.max_health).contains(&p.health)) {
            return Err(invalid("player.health", "must be within 0..=maxHealth"));
        }
        if !(p.armor.is_finite() && (0.0..=ARMOR_CAP).contains(&p.armor)) {
            return Err(invalid("player.armor", "must be within 0..=0.7"));
        }
        if self.wave == 0 {
            return Err(invalid("wave", "must start at 1"));
        }
        if self.wave > MAX_WAVE {
            return Err(invalid("wave", "must be at most 1000"));
        }
        for m in &self.monsters {
            finite("monsters.x", m.x)?;
            finite("monsters.y", m.y)?;
            finite("monsters.speed", m.speed)?;
            if !(m.size.is_finite() && m.size > 0.0) {
                return Err(invalid("monsters.size", "must be positive"));
            }
            if !(m.max_health.is_finite() && m.max_health > 0.0) {
                return Err(invalid("monsters.maxHealth", "must be positive"));
            }
            if !(m.health.is_finite() && m.health > 0.0 && m.health <= m.max_health) {
                return Err(invalid("monsters.health", "must be within (0, maxHealth]"));
            }
        }
        Ok(())
    }
}

/// Serialize to JSON and wrap in Base64.
pub fn encode(data: &SaveData) -> Result<String, SaveCodeError> {
    let json = serde_json::to_string(data)?;
    Ok(BASE64.encode(json))
}

/// Unwrap, parse, and validate a save code. Surrounding whitespace is
/// ignored.
pub fn decode(code: &str) -> Result<SaveData, SaveCodeError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(SaveCodeError::Empty);
    }
    let bytes = BASE64.decode(code)?;
    let json = String::from_utf8(bytes)?;
    let data: SaveData = serde_json::from_str(&json)?;
    data.validate()?;
    Ok(data)
}

fn finite(field: &'static str, value: f64) -> Result<(), SaveCodeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite number"))
    }
}

fn invalid(field: &'static str, reason: &str) -> SaveCodeError {
    SaveCodeError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SaveData {
        SaveData {
            player: SavedPlayer {
                x: 123.456,
                y: 0.1 + 0.2,
                health: 87.35000000000001,
                max_health: 100.0,
                weapon: WeaponId::Gun,
                armor: 0.30000000000000004,
                metal: 42,
                base_speed: 3.0,
                speed: 3.0,
            },
            player_class: PlayerClass::None,
            wave: 3,
            grace_time: false,
            grace_timer: 0,
            monsters: vec![SavedMonster {
                x: 17.25,
                y: 399.999,
                size: 12.0,
                health: 29.9,
                max_health: 30.0,
                speed: 1.0,
                boss: false,
                poison: 179,
            }],
        }
    }

    #[test]
    fn encode_decode_is_exact() {
        let data = sample();
        let code = encode(&data).unwrap();
        assert!(code.chars().all(|c| c.is_ascii_graphic()));
        assert_eq!(decode(&code).unwrap(), data);
    }

    #[test]
    fn json_uses_camel_case_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        for key in ["playerClass", "graceTime", "graceTimer", "maxHealth", "baseSpeed"] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
        assert!(json.contains(r#""playerClass":"None""#));
        assert!(json.contains(r#""weapon":"gun""#));
    }

    #[test]
    fn decodes_hand_written_browser_code() {
        let json = r#"{"player":{"x":300,"y":200,"health":100,"maxHealth":150,"weapon":"sword","armor":0,"metal":9,"baseSpeed":10,"speed":10},"playerClass":"tank","wave":2,"graceTime":true,"graceTimer":17000,"monsters":[]}"#;
        let code = BASE64.encode(json);
        let data = decode(&code).unwrap();
        assert_eq!(data.player_class, PlayerClass::Tank);
        assert_eq!(data.player.max_health, 150.0);
        assert_eq!(data.grace_timer, 17_000);
        let player = data.restore_player();
        assert_eq!(player.loadout.sword.damage, 20.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode(""), Err(SaveCodeError::Empty)));
        assert!(matches!(decode("!!!not base64!!!"), Err(SaveCodeError::Decode(_))));
        let not_json = BASE64.encode("hello");
        assert!(matches!(decode(&not_json), Err(SaveCodeError::Json(_))));
        let wrong_shape = BASE64.encode(r#"{"player":{}}"#);
        assert!(matches!(decode(&wrong_shape), Err(SaveCodeError::Json(_))));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut data = sample();
        data.player.armor = 0.9;
        let code = encode(&data).unwrap();
        assert!(matches!(
            decode(&code),
            Err(SaveCodeError::Invalid { field: "player.armor", .. })
        ));

        let mut data = sample();
        data.wave = 0;
        assert!(data.validate().is_err());

        let mut data = sample();
        data.monsters[0].health = 0.0;
        assert!(data.validate().is_err());
    }

    #[test]
    fn rejects_wave_past_the_cap() {
        let mut data = sample();
        data.wave = MAX_WAVE;
        assert!(data.validate().is_ok());

        data.wave = 2_000_000_000;
        let code = encode(&data).unwrap();
        assert!(matches!(
            decode(&code),
            Err(SaveCodeError::Invalid { field: "wave", .. })
        ));
    }

    #[test]
    fn restore_wave_maps_grace_flag() {
        let mut data = sample();
        assert_eq!(data.restore_wave().phase, WavePhase::Fighting);
        data.grace_time = true;
        assert_eq!(data.restore_wave().phase, WavePhase::Grace);
    }
}
