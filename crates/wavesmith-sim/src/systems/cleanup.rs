//! Cleanup system: removes entities marked for removal during the tick.

use hecs::{Entity, World};

/// Despawn every entity in the buffer. Entities may appear more than once
/// or already be gone.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
