//! Simulation state and core types
//!
//! World convention: Y grows upward and the player travels toward -Y, so
//! "ahead" (down the slope) is more negative Y and "behind" is more positive Y.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::error::StartupError;
use crate::tuning::Tuning;

/// Which sprite the player is showing this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Forward,
    Left,
    Right,
    Jump,
    JumpLeft,
    JumpRight,
    /// Crashed, waiting for respawn
    Wipeout,
}

impl VisualState {
    /// Derive the visual state from this frame's steering and the jump/alive flags.
    ///
    /// Right wins when both directions are held, matching the steering order.
    pub fn derive(left: bool, right: bool, jumping: bool, alive: bool) -> Self {
        if !alive {
            return VisualState::Wipeout;
        }
        match (left, right, jumping) {
            (_, true, false) => VisualState::Right,
            (_, true, true) => VisualState::JumpRight,
            (true, false, false) => VisualState::Left,
            (true, false, true) => VisualState::JumpLeft,
            (false, false, false) => VisualState::Forward,
            (false, false, true) => VisualState::Jump,
        }
    }
}

/// The snowboarder
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// World position (sprite center)
    pub pos: Vec2,
    /// Velocity in units/second
    pub vel: Vec2,
    /// Collision extents (full width, height)
    pub size: Vec2,
    pub visual: VisualState,
    pub alive: bool,
    /// Airborne; immune to ground obstacles
    pub jumping: bool,
    pub time_since_jump: f32,
}

impl Player {
    /// Player at the start line, cruising downhill
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.viewport_center(),
            vel: Vec2::new(0.0, -tuning.base_speed),
            size: tuning.player_size,
            visual: VisualState::Forward,
            alive: true,
            jumping: false,
            time_since_jump: 0.0,
        }
    }

    /// Put the player back on the start line
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self {
            size: self.size,
            ..Self::new(tuning)
        };
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_size(self.pos, self.size)
    }
}

/// Obstacle archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Low obstacle (hard drive); can be jumped over
    Ground,
    /// Tall obstacle (server rack); jumping does not help
    Aerial,
}

impl ObstacleKind {
    /// Whether an airborne player clears this obstacle
    pub fn jumpable(self) -> bool {
        self == ObstacleKind::Ground
    }
}

/// A stationary obstacle on the slope
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub kind: ObstacleKind,
    /// Collision extents (full width, height)
    pub size: Vec2,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_size(self.pos, self.size)
    }
}

/// Things that happened during a step, drained by the driver for audio/logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    JumpStarted,
    JumpEnded,
    ObstacleSpawned { kind: ObstacleKind, pos: Vec2 },
    /// Player crashed; carries the final score of the run
    Died { score: u64 },
    Respawned,
}

/// Complete simulation state, owned by the loop driver
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub player: Player,
    /// Active obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    /// Derived each step from the player position
    pub camera: Vec2,
    /// Seconds between spawns
    pub difficulty: f32,
    pub time_since_last_obstacle: f32,
    /// Steps taken since the state was created
    pub frame: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Events raised by the most recent step
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create a new run with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new run with custom tuning, rejecting values the step cannot run with
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, StartupError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(&tuning);
        let mut state = Self {
            seed,
            player,
            obstacles: Vec::new(),
            camera: Vec2::ZERO,
            difficulty: tuning.initial_difficulty,
            time_since_last_obstacle: 0.0,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            tuning,
        };
        state.update_camera();
        state
    }

    pub fn is_dead(&self) -> bool {
        !self.player.alive
    }

    /// Y coordinate of the start line
    pub fn start_line(&self) -> f32 {
        self.tuning.viewport_center().y
    }

    /// Score: distance travelled past the start line, never negative
    pub fn score(&self) -> u64 {
        let distance = self.start_line() - self.player.pos.y;
        (distance / self.tuning.score_divisor).max(0.0).round() as u64
    }

    /// Recenter the camera on the player, biased so the player sits high in frame
    pub fn update_camera(&mut self) {
        self.camera = self.player.pos
            - self.tuning.viewport_center()
            - Vec2::new(0.0, self.tuning.camera_bias);
    }

    /// Back to the start line with an empty slope and the initial spawn interval
    pub fn respawn(&mut self) {
        self.player.reset(&self.tuning);
        self.difficulty = self.tuning.initial_difficulty;
        self.obstacles.clear();
    }
}
