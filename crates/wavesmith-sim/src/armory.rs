//! Forging and class loadouts.
//!
//! Everything here mutates only the player record. Phase checks (grace only)
//! belong to the engine.

use wavesmith_core::components::Player;
use wavesmith_core::constants::*;
use wavesmith_core::enums::{ForgeItem, PlayerClass, WeaponId};
use wavesmith_core::types::Loadout;

/// One-time stat overrides a class applies when picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProfile {
    pub max_health: f64,
    pub base_speed: f64,
    pub sword_damage: Option<f64>,
    pub gun_damage: Option<f64>,
    /// Berserkers fight unarmored.
    pub strips_armor: bool,
}

impl ClassProfile {
    /// Profile for a class; `None` for the classless state.
    pub fn for_class(class: PlayerClass) -> Option<Self> {
        let profile = match class {
            PlayerClass::None => return None,
            PlayerClass::Tank => Self {
                max_health: 150.0,
                base_speed: 10.0,
                sword_damage: Some(20.0),
                gun_damage: None,
                strips_armor: false,
            },
            PlayerClass::Assassin => Self {
                max_health: 100.0,
                base_speed: 15.0,
                sword_damage: Some(10.0),
                gun_damage: None,
                strips_armor: false,
            },
            PlayerClass::Gunner => Self {
                max_health: 90.0,
                base_speed: 5.0,
                sword_damage: None,
                gun_damage: Some(15.0),
                strips_armor: false,
            },
            PlayerClass::Berserker => Self {
                max_health: 120.0,
                base_speed: 10.0,
                sword_damage: Some(20.0),
                gun_damage: None,
                strips_armor: true,
            },
        };
        Some(profile)
    }
}

/// Weapon stats for a class, derived from the default loadout.
pub fn loadout_for(class: PlayerClass) -> Loadout {
    let mut loadout = Loadout::default();
    if let Some(profile) = ClassProfile::for_class(class) {
        if let Some(damage) = profile.sword_damage {
            loadout.sword.damage = damage;
        }
        if let Some(damage) = profile.gun_damage {
            loadout.gun.damage = damage;
        }
    }
    loadout
}

/// Re-derive movement speed from base speed and armor.
pub fn recompute_speed(player: &mut Player) {
    let armor_penalty = player.armor * ARMOR_SPEED_PENALTY;
    player.speed = (player.base_speed - armor_penalty).max(0.0);
}

/// Metal needed for a forge item.
pub fn forge_cost(item: ForgeItem) -> u32 {
    match item {
        ForgeItem::Sword => FORGE_SWORD_COST,
        ForgeItem::Gun => FORGE_GUN_COST,
        ForgeItem::Armor => FORGE_ARMOR_COST,
    }
}

/// Spend metal on a forge item. Returns false, changing nothing, when the
/// player cannot afford it.
pub fn forge(player: &mut Player, item: ForgeItem) -> bool {
    let cost = forge_cost(item);
    if player.metal < cost {
        return false;
    }
    player.metal -= cost;
    match item {
        ForgeItem::Sword => player.weapon = WeaponId::Sword,
        ForgeItem::Gun => player.weapon = WeaponId::Gun,
        ForgeItem::Armor => {
            player.armor = (player.armor + FORGE_ARMOR_STEP).min(ARMOR_CAP);
            recompute_speed(player);
        }
    }
    true
}

/// Apply a class to a classless player. Returns false if the player already
/// has a class or `class` is `None`.
pub fn apply_class(player: &mut Player, class: PlayerClass) -> bool {
    if player.class != PlayerClass::None {
        return false;
    }
    let Some(profile) = ClassProfile::for_class(class) else {
        return false;
    };
    player.class = class;
    player.max_health = profile.max_health;
    player.health = profile.max_health;
    player.base_speed = profile.base_speed;
    if profile.strips_armor {
        player.armor = 0.0;
    }
    player.loadout = loadout_for(class);
    recompute_speed(player);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::new_player;

    #[test]
    fn armor_forge_four_times() {
        let mut player = new_player();
        player.metal = 80;
        for _ in 0..4 {
            assert!(forge(&mut player, ForgeItem::Armor));
        }
        assert!((player.armor - 0.4).abs() < 1e-9);
        assert_eq!(player.metal, 0);
        assert!(!forge(&mut player, ForgeItem::Armor));
        assert!((player.armor - 0.4).abs() < 1e-9);
    }

    #[test]
    fn armor_never_exceeds_cap() {
        let mut player = new_player();
        player.metal = 20 * 50;
        for _ in 0..50 {
            forge(&mut player, ForgeItem::Armor);
            assert!(player.armor <= ARMOR_CAP);
            assert!(player.armor >= 0.0);
        }
        assert_eq!(player.armor, ARMOR_CAP);
        assert_eq!(player.speed, player.base_speed, "armor costs no speed");
    }

    #[test]
    fn forge_without_metal_is_noop() {
        let mut player = new_player();
        player.metal = 14;
        let before = player.clone();
        assert!(!forge(&mut player, ForgeItem::Gun));
        assert_eq!(player, before);
    }

    #[test]
    fn forge_gun_equips_it() {
        let mut player = new_player();
        player.metal = 15;
        assert!(forge(&mut player, ForgeItem::Gun));
        assert_eq!(player.weapon, WeaponId::Gun);
        assert_eq!(player.metal, 0);
    }

    #[test]
    fn tank_overrides() {
        let mut player = new_player();
        player.health = 40.0;
        assert!(apply_class(&mut player, PlayerClass::Tank));
        assert_eq!(player.max_health, 150.0);
        assert_eq!(player.health, 150.0);
        assert_eq!(player.speed, 10.0);
        assert_eq!(player.loadout.sword.damage, 20.0);
        assert_eq!(player.loadout.gun.damage, 20.0);
    }

    #[test]
    fn gunner_changes_only_gun() {
        let mut player = new_player();
        assert!(apply_class(&mut player, PlayerClass::Gunner));
        assert_eq!(player.loadout.gun.damage, 15.0);
        assert_eq!(player.loadout.sword.damage, 4.0);
        assert_eq!(player.speed, 5.0);
    }

    #[test]
    fn berserker_strips_armor() {
        let mut player = new_player();
        player.armor = 0.3;
        assert!(apply_class(&mut player, PlayerClass::Berserker));
        assert_eq!(player.armor, 0.0);
        assert_eq!(player.max_health, 120.0);
    }

    #[test]
    fn class_only_once() {
        let mut player = new_player();
        assert!(apply_class(&mut player, PlayerClass::Assassin));
        assert!(!apply_class(&mut player, PlayerClass::Tank));
        assert_eq!(player.class, PlayerClass::Assassin);
        assert_eq!(player.loadout.sword.damage, 10.0);
    }

    #[test]
    fn class_none_rejected() {
        let mut player = new_player();
        assert!(!apply_class(&mut player, PlayerClass::None));
    }

    #[test]
    fn loadouts_do_not_leak_between_classes() {
        assert_eq!(loadout_for(PlayerClass::Gunner).sword.damage, 4.0);
        assert_eq!(loadout_for(PlayerClass::Tank).gun.damage, 20.0);
        assert_eq!(loadout_for(PlayerClass::None), Loadout::default());
    }
}
