//! Bullet integration and hit resolution.

use hecs::{Entity, World};

use wavesmith_core::components::{Bullet, Monster, Player};
use wavesmith_core::constants::{BULLET_BOUNDS_MARGIN, BULLET_MAX_AGE_TICKS};
use wavesmith_core::events::GameEvent;
use wavesmith_core::types::{Position, Velocity};

use super::combat;

/// Advance every bullet, then resolve hits. A bullet stops at the first
/// live monster it overlaps (in world iteration order). Bullets that hit,
/// leave the field, or outlive their lifetime are marked for removal.
pub fn run(
    world: &mut World,
    player: &mut Player,
    field_width: f64,
    field_height: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let mut in_flight: Vec<(Entity, Position, bool)> = Vec::new();
    for (entity, (pos, vel, bullet)) in world.query_mut::<(&mut Position, &Velocity, &mut Bullet)>() {
        pos.x += vel.dx;
        pos.y += vel.dy;
        bullet.age += 1;
        let expired = bullet.age >= BULLET_MAX_AGE_TICKS
            || out_of_bounds(pos, field_width, field_height);
        in_flight.push((entity, *pos, expired));
    }

    let gun_damage = player.loadout.gun.damage;
    for (bullet, bullet_pos, expired) in in_flight {
        let mut hit = false;
        let mut killed = None;
        for (entity, (pos, monster)) in world.query_mut::<(&Position, &mut Monster)>() {
            let Some(died) = combat::resolve_bullet_hit(&bullet_pos, pos, monster, gun_damage)
            else {
                continue;
            };
            hit = true;
            if died {
                killed = Some((entity, monster.boss));
            }
            break;
        }

        if hit || expired {
            despawn_buffer.push(bullet);
        }
        if let Some((entity, boss)) = killed {
            combat::kill_monster(entity, boss, player, despawn_buffer, events);
        }
    }
}

fn out_of_bounds(pos: &Position, field_width: f64, field_height: f64) -> bool {
    pos.x < -BULLET_BOUNDS_MARGIN
        || pos.y < -BULLET_BOUNDS_MARGIN
        || pos.x > field_width + BULLET_BOUNDS_MARGIN
        || pos.y > field_height + BULLET_BOUNDS_MARGIN
}
