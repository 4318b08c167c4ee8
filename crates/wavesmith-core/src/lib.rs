//! Core types and definitions for the WAVESMITH simulation.
//!
//! This crate defines the vocabulary shared by the engine and its hosts:
//! components, commands, input bindings, state snapshots, events, and
//! tuning constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
