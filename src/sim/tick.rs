//! Per-frame simulation step
//!
//! Advances the run by one rendered frame: steering, jumps, respawn,
//! integration, obstacle recycling, collisions, spawning.

use glam::Vec2;

use super::spawn::spawn_if_due;
use super::state::{GameEvent, SimulationState, VisualState};

/// Keys held during a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Respawn after a wipeout (Enter)
    pub confirm: bool,
}

/// Advance the simulation by one frame of `dt` seconds
pub fn step(state: &mut SimulationState, input: &StepInput, dt: f32) {
    let dt = clamp_frame_delta(dt, state.tuning.max_frame_delta);

    state.events.clear();
    state.frame += 1;
    // The spawn clock keeps running through a wipeout
    state.time_since_last_obstacle += dt;

    apply_input(state, input);

    if !state.is_dead() {
        state.player.pos += state.player.vel * dt;
    }
    state.update_camera();

    if !state.is_dead() {
        update_jump(state, dt);
        recycle_obstacles(state);
        detect_collisions(state);
        if !state.is_dead() {
            spawn_if_due(state);
        }
    }

    let player = &mut state.player;
    player.visual = VisualState::derive(input.left, input.right, player.jumping, player.alive);
}

fn clamp_frame_delta(dt: f32, max: Option<f32>) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring invalid frame delta {dt}");
        return 0.0;
    }
    match max {
        Some(max) if dt > max => {
            log::warn!("Frame delta {dt:.3}s clamped to {max:.3}s");
            max
        }
        _ => dt,
    }
}

/// Steering, jump initiation and respawn
fn apply_input(state: &mut SimulationState, input: &StepInput) {
    let speed = state.tuning.base_speed;
    let player = &mut state.player;

    if player.alive {
        // Independent checks: right overrides left when both are held
        let mut vel_x = 0.0;
        if input.left {
            vel_x = -speed;
        }
        if input.right {
            vel_x = speed;
        }
        player.vel.x = vel_x;
    } else {
        player.vel.x = 0.0;
    }

    if input.jump && player.alive && !player.jumping {
        player.jumping = true;
        player.time_since_jump = 0.0;
        player.vel.y = -state.tuning.jump_speed;
        state.events.push(GameEvent::JumpStarted);
        log::debug!("Jump at y={:.0}", player.pos.y);
    }

    if input.confirm && !player.alive {
        state.respawn();
        state.events.push(GameEvent::Respawned);
        log::info!("Respawned (seed {})", state.seed);
    }
}

/// Land once the jump has lasted long enough
fn update_jump(state: &mut SimulationState, dt: f32) {
    let player = &mut state.player;
    if !player.jumping {
        return;
    }
    player.time_since_jump += dt;
    if player.time_since_jump > state.tuning.jump_duration {
        player.jumping = false;
        player.vel = Vec2::new(0.0, -state.tuning.base_speed);
        state.events.push(GameEvent::JumpEnded);
    }
}

/// Drop obstacles the player has left behind.
///
/// Finds the newest obstacle that is past the recycle distance and drops it
/// along with everything spawned before it. Relies on the pool staying in
/// spawn order; a reordered pool would need a full filter instead.
pub fn recycle_obstacles(state: &mut SimulationState) {
    let cutoff = state.player.pos.y + state.tuning.recycle_distance;
    if let Some(last) = state.obstacles.iter().rposition(|o| o.pos.y > cutoff) {
        state.obstacles.drain(..=last);
    }
}

/// Kill the player on any overlap. Airborne players pass over ground obstacles.
pub fn detect_collisions(state: &mut SimulationState) {
    let player = &state.player;
    let bounds = player.bounds();
    let hit = state
        .obstacles
        .iter()
        .filter(|o| !(player.jumping && o.kind.jumpable()))
        .any(|o| bounds.intersects(&o.bounds()));

    if hit {
        let score = state.score();
        state.player.alive = false;
        state.player.jumping = false;
        state.events.push(GameEvent::Died { score });
        log::info!("Wipeout at frame {} with score {}", state.frame, score);
    }
}
