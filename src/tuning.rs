//! Game balance and layout
//!
//! Every gameplay constant can be overridden from JSON. Missing fields fall
//! back to the values in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("tuning JSON could not be parsed")]
    Parse(#[from] serde_json::Error),
    #[error("tuning file could not be read")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal pixels per tick while a direction key is held
    pub player_speed: f32,
    pub player_bottom_offset: f32,

    pub opponent_width: f32,
    pub opponent_height: f32,
    pub opponent_start_y: f32,
    pub opponent_min_speed: f32,
    pub opponent_max_speed: f32,

    pub spawn_interval: u32,
    pub score_per_pass: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_width: CAR_WIDTH,
            player_height: CAR_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            opponent_width: CAR_WIDTH,
            opponent_height: CAR_HEIGHT,
            opponent_start_y: OPPONENT_START_Y,
            opponent_min_speed: OPPONENT_MIN_SPEED,
            opponent_max_speed: OPPONENT_MAX_SPEED,

            spawn_interval: SPAWN_INTERVAL,
            score_per_pass: SCORE_PER_PASS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("opponent_width", self.opponent_width)?;
        positive("opponent_height", self.opponent_height)?;

        non_negative("player_speed", self.player_speed)?;
        non_negative("opponent_min_speed", self.opponent_min_speed)?;

        if self.opponent_max_speed.is_nan() || self.opponent_max_speed <= self.opponent_min_speed {
            return Err(invalid(
                "opponent_max_speed",
                "must be greater than opponent_min_speed",
            ));
        }
        if self.spawn_interval == 0 {
            return Err(invalid("spawn_interval", "must be at least one tick"));
        }
        if self.road_width() < self.player_width.max(self.opponent_width) {
            return Err(invalid("canvas_width", "road is narrower than a car"));
        }
        Ok(())
    }

    /// Left edge of the road (a quarter of the canvas in)
    pub fn road_left(&self) -> f32 {
        self.canvas_width / 4.0
    }

    /// Right edge of the road
    pub fn road_right(&self) -> f32 {
        self.canvas_width * 3.0 / 4.0
    }

    pub fn road_width(&self) -> f32 {
        self.road_right() - self.road_left()
    }

    /// Top-left corner of the player car at the start of a run
    pub fn player_start(&self) -> (f32, f32) {
        (
            self.canvas_width / 2.0 - self.player_width / 2.0,
            self.canvas_height - self.player_bottom_offset,
        )
    }

    /// Element id of the inline JSON block read by `load` (used only in wasm32)
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load tuning from an inline `<script type="application/json">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from page");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring page tuning: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must not be negative"))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be positive"))
    }
}
