//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world, the player and the wave state,
//! processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use wavesmith_core::commands::PlayerCommand;
use wavesmith_core::components::Player;
use wavesmith_core::constants::{
    FIELD_HEIGHT, FIELD_WIDTH, GRACE_REGEN_PER_TICK, SWAP_COOLDOWN_TICKS,
};
use wavesmith_core::enums::{ForgeItem, PlayerClass, WeaponId};
use wavesmith_core::events::GameEvent;
use wavesmith_core::input::InputState;
use wavesmith_core::state::GameStateSnapshot;
use wavesmith_core::types::{Position, SimTime};

use crate::armory;
use crate::persistence::{self, SaveCodeError, SaveData};
use crate::systems;
use crate::wave::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Play field size; monsters spawn inside it.
    pub field_width: f64,
    pub field_height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    player: Player,
    wave: WaveState,
    time: SimTime,
    input: InputState,
    swap_cooldown: u32,
    paused: bool,
    dead: bool,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            world: World::new(),
            player: world_setup::new_player(),
            wave: WaveState::default(),
            time: SimTime::default(),
            input: InputState::default(),
            swap_cooldown: 0,
            paused: false,
            dead: false,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held-key state sampled by subsequent ticks.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.paused && !self.dead {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Build a snapshot without advancing. Drains pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.player,
            &self.wave,
            &self.time,
            self.paused,
            self.dead,
            events,
        )
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn swap_cooldown(&self) -> u32 {
        self.swap_cooldown
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn monster_count(&self) -> usize {
        systems::wave_spawner::monster_count(&self.world)
    }

    /// Mutable player access for test setup.
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    // --- Actions ---

    /// Equip a weapon unless the swap cooldown is still running.
    pub fn switch_weapon(&mut self, weapon: WeaponId) -> bool {
        if self.swap_cooldown > 0 {
            log::debug!(
                "weapon switch to {} rejected: cooldown {}",
                weapon.name(),
                self.swap_cooldown
            );
            return false;
        }
        self.player.weapon = weapon;
        self.swap_cooldown = SWAP_COOLDOWN_TICKS;
        self.events.push(GameEvent::WeaponSwitched { weapon });
        true
    }

    /// Spend metal at the forge. Silently refused when the player is short.
    pub fn forge(&mut self, item: ForgeItem) -> bool {
        if !armory::forge(&mut self.player, item) {
            log::debug!(
                "forge {:?} rejected: {} metal, need {}",
                item,
                self.player.metal,
                armory::forge_cost(item)
            );
            return false;
        }
        self.events.push(GameEvent::Forged { item });
        true
    }

    /// Pick a class. Only during grace and only once per life.
    pub fn choose_class(&mut self, class: PlayerClass) -> bool {
        if !self.wave.is_grace() {
            log::debug!("class {} rejected: wave in progress", class.name());
            return false;
        }
        if !armory::apply_class(&mut self.player, class) {
            log::debug!(
                "class {} rejected: already {}",
                class.name(),
                self.player.class.name()
            );
            return false;
        }
        self.events.push(GameEvent::ClassChosen { class });
        true
    }

    /// End grace now and spawn the wave.
    pub fn skip_grace(&mut self) -> bool {
        self.start_wave()
    }

    /// Fire toward a point. Only with the gun equipped.
    pub fn fire(&mut self, target: Position) -> bool {
        if self.paused || self.dead || self.player.weapon != WeaponId::Gun {
            return false;
        }
        world_setup::spawn_bullet(&mut self.world, self.player.position, target);
        true
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.events.push(if self.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
    }

    /// Full reset to a fresh session. The RNG stream carries on so the next
    /// life sees different spawns. Commands still queued behind a `Restart`
    /// apply to the new session.
    pub fn restart(&mut self) {
        self.world = World::new();
        self.player = world_setup::new_player();
        self.wave = WaveState::default();
        self.time = SimTime::default();
        self.input = InputState::default();
        self.swap_cooldown = 0;
        self.paused = false;
        self.dead = false;
        self.despawn_buffer.clear();
        self.events.clear();
        self.events.push(GameEvent::Restarted);
        log::info!("session restarted");
    }

    // --- Save codes ---

    pub fn save_data(&self) -> SaveData {
        SaveData::capture(&self.player, &self.wave, &self.world)
    }

    /// Export the session as a printable save code.
    pub fn export_save(&self) -> Result<String, SaveCodeError> {
        persistence::encode(&self.save_data())
    }

    /// Replace the session with a save code. On error nothing changes.
    pub fn import_save(&mut self, code: &str) -> Result<(), SaveCodeError> {
        let data = persistence::decode(code)?;
        self.load(&data);
        Ok(())
    }

    fn load(&mut self, data: &SaveData) {
        self.player = data.restore_player();
        self.wave = data.restore_wave();
        self.world = data.restore_world();
        self.swap_cooldown = 0;
        self.dead = false;
        self.despawn_buffer.clear();
        self.events.push(GameEvent::SaveLoaded { wave: self.wave.wave });
        log::info!(
            "save loaded: wave {}, {} monsters",
            self.wave.wave,
            data.monsters.len()
        );
    }

    // --- Tick internals ---

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Rejections are silent.
    fn handle_command(&mut self, command: PlayerCommand) {
        let allowed_when_dead = matches!(
            command,
            PlayerCommand::Restart | PlayerCommand::LoadSave { .. }
        );
        if self.dead && !allowed_when_dead {
            return;
        }
        match command {
            PlayerCommand::SwitchWeapon { weapon } => {
                self.switch_weapon(weapon);
            }
            PlayerCommand::Fire { target } => {
                self.fire(target);
            }
            PlayerCommand::Forge { item } => {
                self.forge(item);
            }
            PlayerCommand::ChooseClass { class } => {
                self.choose_class(class);
            }
            PlayerCommand::SkipGrace => {
                self.skip_grace();
            }
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::LoadSave { code } => {
                if let Err(err) = self.import_save(&code) {
                    log::warn!("invalid save code: {err}");
                }
            }
        }
    }

    /// Grace → Fighting, spawning the wave.
    fn start_wave(&mut self) -> bool {
        let Some(definition) = self.wave.begin_fighting() else {
            return false;
        };
        systems::wave_spawner::spawn_wave(
            &mut self.world,
            &mut self.rng,
            self.config.field_width,
            self.config.field_height,
            definition,
        );
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave.wave,
            regulars: definition.regulars,
            boss: definition.boss,
        });
        log::info!(
            "wave {} started: {} regulars{}",
            self.wave.wave,
            definition.regulars,
            if definition.boss { " + boss" } else { "" }
        );
        true
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Weapon swap cooldown
        self.swap_cooldown = self.swap_cooldown.saturating_sub(1);

        // 2. Player movement
        systems::movement::move_player(&mut self.player, &self.input);

        // 3. Grace countdown and healing
        if self.wave.is_grace() {
            self.player.health =
                (self.player.health + GRACE_REGEN_PER_TICK).min(self.player.max_health);
            if self.wave.tick_grace() {
                self.start_wave();
            }
        }

        // 4. Monster AI (chase, contact, poison)
        systems::monster_ai::run(
            &mut self.world,
            &mut self.player,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 5. Bullets
        systems::projectile::run(
            &mut self.world,
            &mut self.player,
            self.config.field_width,
            self.config.field_height,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 6. Sword
        if self.input.melee {
            systems::combat::resolve_melee_swing(
                &mut self.world,
                &mut self.player,
                &mut self.despawn_buffer,
                &mut self.events,
            );
        }

        // 7. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 8. Death
        if self.player.health <= 0.0 {
            self.player.health = 0.0;
            self.dead = true;
            self.events.push(GameEvent::PlayerDied {
                wave: self.wave.wave,
            });
            log::info!("player died on wave {}", self.wave.wave);
            return;
        }

        // 9. Wave clear
        let remaining = self.monster_count();
        if let Some(cleared) = self.wave.complete_wave(remaining) {
            self.events.push(GameEvent::WaveCleared { wave: cleared });
            log::info!("wave {cleared} cleared");
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
