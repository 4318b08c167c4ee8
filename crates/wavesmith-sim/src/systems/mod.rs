//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only) plus the pieces of engine state they touch. They do not own
//! state.

pub mod cleanup;
pub mod combat;
pub mod monster_ai;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod wave_spawner;
