//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Play field ---

/// Default play field width (pixels).
pub const FIELD_WIDTH: f64 = 600.0;

/// Default play field height (pixels).
pub const FIELD_HEIGHT: f64 = 400.0;

// --- Player ---

/// Player spawn position.
pub const PLAYER_START_X: f64 = 300.0;
pub const PLAYER_START_Y: f64 = 200.0;

/// Player collision radius.
pub const PLAYER_SIZE: f64 = 15.0;

/// Movement per tick before class overrides.
pub const PLAYER_BASE_SPEED: f64 = 3.0;

pub const PLAYER_MAX_HEALTH: f64 = 100.0;

/// Highest fraction of incoming damage armor can mitigate.
pub const ARMOR_CAP: f64 = 0.7;

/// Speed lost per point of armor. Zero: armor costs no speed.
pub const ARMOR_SPEED_PENALTY: f64 = 0.0;

/// Ticks before another weapon switch is allowed (~0.5 s).
pub const SWAP_COOLDOWN_TICKS: u32 = 30;

// --- Weapons ---

pub const SWORD_DAMAGE: f64 = 4.0;
pub const SWORD_RANGE: f64 = 50.0;
pub const GUN_DAMAGE: f64 = 20.0;
pub const GUN_RANGE: f64 = 300.0;

/// Divisor applied to the player→target offset to get bullet velocity.
pub const BULLET_SPEED_DIVISOR: f64 = 15.0;

/// Bullets further than this outside the field are dropped.
pub const BULLET_BOUNDS_MARGIN: f64 = 50.0;

/// Bullets are dropped after this many ticks regardless of position.
pub const BULLET_MAX_AGE_TICKS: u32 = 600;

// --- Combat ---

/// Health lost per tick of monster contact, before armor.
pub const CONTACT_DAMAGE: f64 = 0.4;

/// Health lost per poison tick.
pub const POISON_DAMAGE: f64 = 0.1;

/// Poison ticks applied by an assassin's sword hit.
pub const POISON_DURATION_TICKS: u32 = 180;

/// Metal credited per monster kill.
pub const KILL_REWARD_METAL: u32 = 3;

// --- Monsters ---

pub const MONSTER_SIZE: f64 = 12.0;
pub const MONSTER_HEALTH: f64 = 30.0;
pub const MONSTER_SPEED: f64 = 1.0;

pub const BOSS_SIZE: f64 = 25.0;
pub const BOSS_HEALTH: f64 = 300.0;
pub const BOSS_SPEED: f64 = 0.6;

// --- Waves ---

/// Grace window length in ticks (5 minutes).
pub const GRACE_DURATION_TICKS: u32 = 300 * TICK_RATE;

/// Health regenerated per grace tick.
pub const GRACE_REGEN_PER_TICK: f64 = 0.15;

/// Regular monsters spawned per wave number.
pub const MONSTERS_PER_WAVE: u32 = 3;

/// A boss joins every wave that is a multiple of this.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Highest wave number a save code may carry.
pub const MAX_WAVE: u32 = 1_000;

// --- Forge ---

pub const FORGE_SWORD_COST: u32 = 10;
pub const FORGE_GUN_COST: u32 = 15;
pub const FORGE_ARMOR_COST: u32 = 20;

/// Armor added per forge.
pub const FORGE_ARMOR_STEP: f64 = 0.1;
