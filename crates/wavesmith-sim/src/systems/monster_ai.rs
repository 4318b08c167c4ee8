//! Monster AI: chase the player, hurt on contact, suffer poison.

use hecs::{Entity, World};

use wavesmith_core::components::{Monster, Player};
use wavesmith_core::events::GameEvent;
use wavesmith_core::types::Position;

use super::combat;

/// Move every live monster one step toward the player, then apply contact
/// damage (measured before the step) and one poison tick.
pub fn run(
    world: &mut World,
    player: &mut Player,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let target = player.position.as_vec();
    let mut kills = Vec::new();

    for (entity, (pos, monster)) in world.query_mut::<(&mut Position, &mut Monster)>() {
        if !combat::is_alive(monster) {
            continue;
        }
        let offset = target - pos.as_vec();
        let distance = offset.length();
        // Zero when standing exactly on the player.
        let step = offset.normalize_or_zero() * monster.speed;
        *pos = Position::from(pos.as_vec() + step);

        combat::resolve_monster_contact(player, distance, monster);

        if combat::resolve_poison(monster) {
            kills.push((entity, monster.boss));
        }
    }

    for (entity, boss) in kills {
        combat::kill_monster(entity, boss, player, despawn_buffer, events);
    }
}
