//! Systems that operate on the world snapshot each tick.
//!
//! Systems are plain functions over `&mut WorldSnapshot`, called by
//! `step::advance` on its private copy. They do not own state and do not
//! touch the published snapshot.

pub mod explosions;
pub mod impact;
pub mod intercept;
pub mod movement;
pub mod outcome;
pub mod progression;
pub mod wave_spawner;
