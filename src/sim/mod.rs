//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-tick speeds
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use spawner::{Spawner, spawn_opponent};
pub use state::{GameEvent, GamePhase, GameState, Opponent, Player};
pub use tick::{TickInput, tick};
