//! Road Dodger - A vertical-scrolling road arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, opponents, spawning, collisions)
//! - `renderer`: Drawing surface abstraction and WebGPU shape pipeline
//! - `input`: Keyboard state shared between event handlers and the tick
//! - `tuning`: Data-driven game balance and layout

pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use input::KeyState;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for `Tuning`)
pub mod consts {
    /// Logical canvas size in pixels
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Car footprint, shared by the player and opponents
    pub const CAR_WIDTH: f32 = 30.0;
    pub const CAR_HEIGHT: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the canvas bottom to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 70.0;

    /// Opponents enter just above the visible area
    pub const OPPONENT_START_Y: f32 = -50.0;
    /// Opponent speed range in pixels per tick (max exclusive)
    pub const OPPONENT_MIN_SPEED: f32 = 2.5;
    pub const OPPONENT_MAX_SPEED: f32 = 5.5;
    pub const OPPONENT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    /// Ticks between opponent spawns
    pub const SPAWN_INTERVAL: u32 = 100;
    /// Points for each opponent that leaves the screen
    pub const SCORE_PER_PASS: u64 = 10;
}
