//! Wave spawning system: fills the field when grace ends.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use wavesmith_core::components::Monster;

use crate::wave::WaveDefinition;
use crate::world_setup;

/// Replace whatever monsters remain with a fresh wave. Regulars spawn
/// first, the boss (if any) last.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    field_width: f64,
    field_height: f64,
    definition: WaveDefinition,
) {
    let stale: Vec<Entity> = world
        .query::<&Monster>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in stale {
        let _ = world.despawn(entity);
    }

    for _ in 0..definition.regulars {
        world_setup::spawn_monster(world, rng, field_width, field_height, false);
    }
    if definition.boss {
        world_setup::spawn_monster(world, rng, field_width, field_height, true);
    }
}

/// Number of monsters on the field.
pub fn monster_count(world: &World) -> usize {
    world.query::<&Monster>().iter().count()
}
