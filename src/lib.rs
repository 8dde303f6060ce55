//! SNOboard - a downhill endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, obstacles, collisions, scoring)
//! - `renderer`: Presentation sink abstraction and per-frame draw sequence
//! - `audio`: Audio sink abstraction and event-driven sound cues
//! - `platform`: Clock and input abstraction
//! - `game`: Frame loop driver tying the collaborators together
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::StartupError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Default tuning constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;

    /// Downhill cruising speed (units/s), also the horizontal steering speed
    pub const BASE_SPEED: f32 = 300.0;
    /// Downhill speed while airborne
    pub const JUMP_SPEED: f32 = 500.0;
    /// Seconds a jump lasts
    pub const JUMP_DURATION: f32 = 0.9;

    /// Obstacles further than this behind the player are recycled
    pub const RECYCLE_DISTANCE: f32 = 400.0;
    /// New obstacles appear this far ahead of the player
    pub const SPAWN_DISTANCE: f32 = 700.0;

    /// Seconds between spawns at the start of a run
    pub const INITIAL_DIFFICULTY: f32 = 1.0;
    /// Spawn interval shrinks by this much per spawn
    pub const DIFFICULTY_DECAY: f32 = 0.01;
    /// Spawn interval never drops below this
    pub const DIFFICULTY_FLOOR: f32 = 0.25;

    /// Extra downward camera shift so the player sits higher in frame
    pub const CAMERA_BIAS: f32 = 200.0;
    /// Distance units per score point
    pub const SCORE_DIVISOR: f32 = 2.0;

    /// Collision extents (full width, height)
    pub const PLAYER_SIZE: (f32, f32) = (40.0, 64.0);
    pub const GROUND_OBSTACLE_SIZE: (f32, f32) = (48.0, 32.0);
    pub const AERIAL_OBSTACLE_SIZE: (f32, f32) = (56.0, 112.0);
}
