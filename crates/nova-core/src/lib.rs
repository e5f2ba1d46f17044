//! Core types and definitions for the NOVA DEFENSE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity records, commands, the world snapshot, events, and constants.
//! It has no dependency on any runtime, renderer or audio backend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
