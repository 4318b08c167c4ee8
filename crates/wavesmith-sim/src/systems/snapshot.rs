//! Snapshot system: reads the world and builds a `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use wavesmith_core::components::{Bullet, Monster, Player};
use wavesmith_core::events::GameEvent;
use wavesmith_core::state::*;
use wavesmith_core::types::{Position, SimTime};

use crate::wave::WaveState;

/// Build a complete snapshot from the current engine state.
pub fn build_snapshot(
    world: &World,
    player: &Player,
    wave: &WaveState,
    time: &SimTime,
    paused: bool,
    dead: bool,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        tick: time.tick,
        wave: wave.wave,
        phase: wave.phase,
        grace_timer: wave.grace_timer,
        paused,
        dead,
        player: build_player(player),
        monsters: build_monsters(world),
        bullets: build_bullets(world),
        hud: build_hud(player, wave),
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        size: player.size,
        health: player.health,
        max_health: player.max_health,
        weapon: player.weapon,
        armor: player.armor,
        metal: player.metal,
        speed: player.speed,
        class: player.class,
    }
}

fn build_monsters(world: &World) -> Vec<MonsterView> {
    world
        .query::<(&Position, &Monster)>()
        .iter()
        .map(|(_, (pos, monster))| MonsterView {
            position: *pos,
            size: monster.size,
            health: monster.health,
            max_health: monster.max_health,
            boss: monster.boss,
        })
        .collect()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(_, (pos, _))| BulletView { position: *pos })
        .collect()
}

fn build_hud(player: &Player, wave: &WaveState) -> HudView {
    let damage = player.loadout.stats(player.weapon).damage;
    let health_fraction = if player.max_health > 0.0 {
        player.health / player.max_health
    } else {
        0.0
    };
    HudView {
        info: format!(
            "Wave: {} | {}",
            wave.wave,
            phase_label(wave.phase, wave.grace_timer)
        ),
        metal: player.metal.to_string(),
        weapon_stats: weapon_stats_label(player.weapon, damage, player.armor, player.speed),
        class_label: player.class.name().to_uppercase(),
        health_fraction,
    }
}
