//! Combat resolution: damage, poison, melee swings, and kills.
//!
//! A monster whose health reaches zero is dead for the rest of the tick:
//! it takes no further damage and is credited exactly once. The entity
//! itself is removed later by the cleanup system.

use hecs::{Entity, World};

use wavesmith_core::components::{Monster, Player};
use wavesmith_core::constants::*;
use wavesmith_core::enums::{PlayerClass, WeaponId};
use wavesmith_core::events::GameEvent;
use wavesmith_core::types::Position;

pub fn is_alive(monster: &Monster) -> bool {
    monster.health > 0.0
}

/// Subtract damage from a monster, clamping at zero. Returns true only for
/// the blow that kills it.
pub fn apply_damage(monster: &mut Monster, amount: f64) -> bool {
    if !is_alive(monster) {
        return false;
    }
    monster.health = (monster.health - amount).max(0.0);
    !is_alive(monster)
}

/// Continuous contact damage while the two circles overlap.
pub fn resolve_monster_contact(player: &mut Player, distance: f64, monster: &Monster) {
    if distance < monster.size + player.size {
        let damage = CONTACT_DAMAGE * (1.0 - player.armor);
        player.health = (player.health - damage).max(0.0);
    }
}

/// One poison tick. Returns true if the poison killed the monster.
pub fn resolve_poison(monster: &mut Monster) -> bool {
    if monster.poison == 0 {
        return false;
    }
    monster.poison -= 1;
    apply_damage(monster, POISON_DAMAGE)
}

/// Test one bullet against one monster. `None` on a miss (or a monster that
/// is already dead), otherwise `Some(killed)` after applying the damage.
pub fn resolve_bullet_hit(
    bullet_pos: &Position,
    monster_pos: &Position,
    monster: &mut Monster,
    damage: f64,
) -> Option<bool> {
    if !is_alive(monster) || bullet_pos.distance_to(monster_pos) >= monster.size {
        return None;
    }
    Some(apply_damage(monster, damage))
}

/// Swing the sword at every live monster in range. Assassins poison what
/// they hit.
pub fn resolve_melee_swing(
    world: &mut World,
    player: &mut Player,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    if player.weapon != WeaponId::Sword {
        return;
    }
    let sword = player.loadout.sword;
    let poisons = player.class == PlayerClass::Assassin;
    let origin = player.position;

    let mut kills = Vec::new();
    for (entity, (pos, monster)) in world.query_mut::<(&Position, &mut Monster)>() {
        if !is_alive(monster) || origin.distance_to(pos) >= sword.range {
            continue;
        }
        let died = apply_damage(monster, sword.damage);
        if poisons {
            monster.poison = POISON_DURATION_TICKS;
        }
        if died {
            kills.push((entity, monster.boss));
        }
    }

    for (entity, boss) in kills {
        kill_monster(entity, boss, player, despawn_buffer, events);
    }
}

/// Mark a dead monster for removal and pay the player.
pub fn kill_monster(
    entity: Entity,
    boss: bool,
    player: &mut Player,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.push(entity);
    player.metal = player.metal.saturating_add(KILL_REWARD_METAL);
    events.push(GameEvent::MonsterKilled {
        boss,
        metal_awarded: KILL_REWARD_METAL,
    });
    log::debug!("monster killed (boss: {boss}), metal now {}", player.metal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::{monster_archetype, new_player, spawn_monster_at};

    #[test]
    fn damage_clamps_and_reports_kill_once() {
        let mut monster = monster_archetype(false);
        assert!(!apply_damage(&mut monster, 29.0));
        assert!(apply_damage(&mut monster, 5.0));
        assert_eq!(monster.health, 0.0);
        assert!(!apply_damage(&mut monster, 5.0));
        assert_eq!(monster.health, 0.0);
    }

    #[test]
    fn contact_damage_respects_armor() {
        let mut player = new_player();
        player.armor = 0.5;
        let monster = monster_archetype(false);
        resolve_monster_contact(&mut player, 10.0, &monster);
        assert!((player.health - 99.8).abs() < 1e-9);
    }

    #[test]
    fn no_contact_when_apart() {
        let mut player = new_player();
        let monster = monster_archetype(false);
        resolve_monster_contact(&mut player, 27.0, &monster);
        assert_eq!(player.health, 100.0);
    }

    #[test]
    fn contact_never_drops_health_below_zero() {
        let mut player = new_player();
        player.health = 0.1;
        let monster = monster_archetype(true);
        resolve_monster_contact(&mut player, 0.0, &monster);
        assert_eq!(player.health, 0.0);
    }

    #[test]
    fn poison_ticks_down() {
        let mut monster = monster_archetype(false);
        monster.poison = 2;
        assert!(!resolve_poison(&mut monster));
        assert!(!resolve_poison(&mut monster));
        assert!(!resolve_poison(&mut monster));
        assert_eq!(monster.poison, 0);
        assert!((monster.health - 29.8).abs() < 1e-9);
    }

    #[test]
    fn poison_can_kill() {
        let mut monster = monster_archetype(false);
        monster.health = 0.05;
        monster.poison = 10;
        assert!(resolve_poison(&mut monster));
    }

    #[test]
    fn bullet_hit_needs_overlap_and_a_live_target() {
        let mut monster = monster_archetype(false);
        let at = Position::new(100.0, 100.0);
        assert_eq!(
            resolve_bullet_hit(&Position::new(112.0, 100.0), &at, &mut monster, 20.0),
            None
        );
        assert_eq!(
            resolve_bullet_hit(&Position::new(111.0, 100.0), &at, &mut monster, 20.0),
            Some(false)
        );
        assert_eq!(resolve_bullet_hit(&at, &at, &mut monster, 20.0), Some(true));
        assert_eq!(resolve_bullet_hit(&at, &at, &mut monster, 20.0), None);
    }

    #[test]
    fn melee_hits_everything_in_range_and_credits_each_kill() {
        let mut world = World::new();
        let mut player = new_player();
        let mut weak = monster_archetype(false);
        weak.health = 2.0;
        spawn_monster_at(&mut world, Position::new(310.0, 200.0), weak);
        spawn_monster_at(&mut world, Position::new(300.0, 230.0), weak);
        let far = spawn_monster_at(&mut world, Position::new(400.0, 200.0), weak);

        let mut despawn = Vec::new();
        let mut events = Vec::new();
        resolve_melee_swing(&mut world, &mut player, &mut despawn, &mut events);

        assert_eq!(despawn.len(), 2);
        assert!(!despawn.contains(&far));
        assert_eq!(player.metal, 6);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn kill_reward_saturates_metal() {
        let mut world = World::new();
        let mut player = new_player();
        player.metal = u32::MAX - 1;
        let entity = spawn_monster_at(
            &mut world,
            Position::new(0.0, 0.0),
            monster_archetype(false),
        );
        let mut despawn = Vec::new();
        let mut events = Vec::new();
        kill_monster(entity, false, &mut player, &mut despawn, &mut events);
        assert_eq!(player.metal, u32::MAX);
        assert_eq!(despawn, vec![entity]);
    }

    #[test]
    fn melee_requires_sword() {
        let mut world = World::new();
        let mut player = new_player();
        player.weapon = WeaponId::Gun;
        let target = spawn_monster_at(
            &mut world,
            Position::new(305.0, 200.0),
            monster_archetype(false),
        );
        resolve_melee_swing(&mut world, &mut player, &mut Vec::new(), &mut Vec::new());
        assert_eq!(world.get::<&Monster>(target).unwrap().health, 30.0);
    }

    #[test]
    fn assassin_swing_poisons() {
        let mut world = World::new();
        let mut player = new_player();
        crate::armory::apply_class(&mut player, PlayerClass::Assassin);
        let target = spawn_monster_at(
            &mut world,
            Position::new(305.0, 200.0),
            monster_archetype(true),
        );
        resolve_melee_swing(&mut world, &mut player, &mut Vec::new(), &mut Vec::new());
        let monster = world.get::<&Monster>(target).unwrap();
        assert_eq!(monster.health, 290.0);
        assert_eq!(monster.poison, POISON_DURATION_TICKS);
    }
}
