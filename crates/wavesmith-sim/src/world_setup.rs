//! Entity spawn factories.
//!
//! Creates the player record and monster/bullet entities with their
//! component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use wavesmith_core::components::{Bullet, Monster, Player};
use wavesmith_core::constants::*;
use wavesmith_core::enums::{PlayerClass, WeaponId};
use wavesmith_core::types::{Loadout, Position, Velocity};

/// A fresh player at the spawn point with no class and no gear.
pub fn new_player() -> Player {
    Player {
        position: Position::new(PLAYER_START_X, PLAYER_START_Y),
        size: PLAYER_SIZE,
        base_speed: PLAYER_BASE_SPEED,
        speed: PLAYER_BASE_SPEED,
        health: PLAYER_MAX_HEALTH,
        max_health: PLAYER_MAX_HEALTH,
        weapon: WeaponId::Sword,
        armor: 0.0,
        metal: 0,
        class: PlayerClass::None,
        loadout: Loadout::default(),
    }
}

/// Archetype stats for a freshly spawned monster.
pub fn monster_archetype(boss: bool) -> Monster {
    if boss {
        Monster {
            size: BOSS_SIZE,
            health: BOSS_HEALTH,
            max_health: BOSS_HEALTH,
            speed: BOSS_SPEED,
            boss: true,
            poison: 0,
        }
    } else {
        Monster {
            size: MONSTER_SIZE,
            health: MONSTER_HEALTH,
            max_health: MONSTER_HEALTH,
            speed: MONSTER_SPEED,
            boss: false,
            poison: 0,
        }
    }
}

/// Spawn a monster at a uniformly random point of the field.
pub fn spawn_monster(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    field_width: f64,
    field_height: f64,
    boss: bool,
) -> hecs::Entity {
    let position = Position::new(
        rng.gen::<f64>() * field_width,
        rng.gen::<f64>() * field_height,
    );
    world.spawn((position, monster_archetype(boss)))
}

/// Spawn a monster with explicit state (used when restoring a save).
pub fn spawn_monster_at(world: &mut World, position: Position, monster: Monster) -> hecs::Entity {
    world.spawn((position, monster))
}

/// Spawn a bullet at `origin` travelling toward `target`.
pub fn spawn_bullet(world: &mut World, origin: Position, target: Position) -> hecs::Entity {
    let velocity = Velocity::new(
        (target.x - origin.x) / BULLET_SPEED_DIVISOR,
        (target.y - origin.y) / BULLET_SPEED_DIVISOR,
    );
    world.spawn((origin, velocity, Bullet::default()))
}
