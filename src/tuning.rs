//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a run can be reshaped from a
//! JSON file without touching code. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::StartupError;
use crate::sim::ObstacleKind;

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Viewport size; the player starts (and respawns) at its center
    pub window_size: Vec2,
    pub base_speed: f32,
    pub jump_speed: f32,
    pub jump_duration: f32,
    pub recycle_distance: f32,
    pub spawn_distance: f32,
    pub initial_difficulty: f32,
    pub difficulty_decay: f32,
    pub difficulty_floor: f32,
    pub camera_bias: f32,
    pub score_divisor: f32,
    /// Optional cap on a single frame delta. Uncapped by default so a long
    /// frame covers the full distance.
    pub max_frame_delta: Option<f32>,
    pub player_size: Vec2,
    pub ground_obstacle_size: Vec2,
    pub aerial_obstacle_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_size: Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            base_speed: BASE_SPEED,
            jump_speed: JUMP_SPEED,
            jump_duration: JUMP_DURATION,
            recycle_distance: RECYCLE_DISTANCE,
            spawn_distance: SPAWN_DISTANCE,
            initial_difficulty: INITIAL_DIFFICULTY,
            difficulty_decay: DIFFICULTY_DECAY,
            difficulty_floor: DIFFICULTY_FLOOR,
            camera_bias: CAMERA_BIAS,
            score_divisor: SCORE_DIVISOR,
            max_frame_delta: None,
            player_size: Vec2::from(PLAYER_SIZE),
            ground_obstacle_size: Vec2::from(GROUND_OBSTACLE_SIZE),
            aerial_obstacle_size: Vec2::from(AERIAL_OBSTACLE_SIZE),
        }
    }
}

impl Tuning {
    /// Center of the viewport in world space at the start line
    pub fn viewport_center(&self) -> Vec2 {
        self.window_size / 2.0
    }

    /// Collision extents for an obstacle kind
    pub fn obstacle_size(&self, kind: ObstacleKind) -> Vec2 {
        match kind {
            ObstacleKind::Ground => self.ground_obstacle_size,
            ObstacleKind::Aerial => self.aerial_obstacle_size,
        }
    }

    /// Parse tuning from JSON, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, StartupError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StartupError::TuningRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would stall or invert the simulation
    pub fn validate(&self) -> Result<(), StartupError> {
        let positive = [
            ("window_size.x", self.window_size.x),
            ("window_size.y", self.window_size.y),
            ("base_speed", self.base_speed),
            ("jump_speed", self.jump_speed),
            ("jump_duration", self.jump_duration),
            ("recycle_distance", self.recycle_distance),
            ("spawn_distance", self.spawn_distance),
            ("difficulty_floor", self.difficulty_floor),
            ("score_divisor", self.score_divisor),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(StartupError::InvalidTuning {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }
        let bad_cap = self
            .max_frame_delta
            .filter(|max| !(max.is_finite() && *max > 0.0));
        if let Some(max) = bad_cap {
            return Err(StartupError::InvalidTuning {
                field: "max_frame_delta",
                reason: format!("must be positive, got {max}"),
            });
        }
        if !self.initial_difficulty.is_finite() {
            return Err(StartupError::InvalidTuning {
                field: "initial_difficulty",
                reason: format!("must be finite, got {}", self.initial_difficulty),
            });
        }
        if !(self.difficulty_decay >= 0.0 && self.difficulty_decay.is_finite()) {
            return Err(StartupError::InvalidTuning {
                field: "difficulty_decay",
                reason: format!("must not be negative, got {}", self.difficulty_decay),
            });
        }
        if self.initial_difficulty < self.difficulty_floor {
            return Err(StartupError::InvalidTuning {
                field: "initial_difficulty",
                reason: format!(
                    "{} is below difficulty_floor {}",
                    self.initial_difficulty, self.difficulty_floor
                ),
            });
        }
        Ok(())
    }
}
