//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller, never read from a clock
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{autopilot_input, nearest_threat};
pub use collision::{Aabb, intersects};
pub use spawn::{ramp_difficulty, spawn_if_due};
pub use state::{GameEvent, Obstacle, ObstacleKind, Player, SimulationState, VisualState};
pub use tick::{StepInput, detect_collisions, recycle_obstacles, step};
