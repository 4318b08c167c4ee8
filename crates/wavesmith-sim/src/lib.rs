//! Simulation engine for WAVESMITH.
//!
//! Owns the hecs world of monsters and bullets plus the player record,
//! runs systems at a fixed tick rate, and produces `GameStateSnapshot`s
//! for the presentation layer.

pub mod armory;
pub mod engine;
pub mod persistence;
pub mod systems;
pub mod wave;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use persistence::{SaveCodeError, SaveData};
pub use wavesmith_core as core;
