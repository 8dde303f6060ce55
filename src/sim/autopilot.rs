//! Demo autopilot
//!
//! Synthesizes the keys a cautious player would hold this frame. Used by the
//! headless binary and by long-run soak tests; never consulted by `step` itself.

use super::state::{Obstacle, SimulationState};
use super::tick::StepInput;

/// Extra horizontal clearance the autopilot tries to keep
const CLEARANCE: f32 = 24.0;

/// Closest obstacle ahead of the player whose lane overlaps the player's
pub fn nearest_threat(state: &SimulationState) -> Option<&Obstacle> {
    let player = &state.player;
    let look_ahead = state.tuning.spawn_distance;
    state
        .obstacles
        .iter()
        .filter(|o| {
            let ahead = player.pos.y - o.pos.y;
            let lane = (player.size.x + o.size.x) / 2.0 + CLEARANCE;
            ahead > -(player.size.y + o.size.y) / 2.0
                && ahead < look_ahead
                && (o.pos.x - player.pos.x).abs() < lane
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}

/// Keys to hold this frame
pub fn autopilot_input(state: &SimulationState) -> StepInput {
    if state.is_dead() {
        return StepInput {
            confirm: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let Some(threat) = nearest_threat(state) else {
        return StepInput::default();
    };

    let mut input = StepInput::default();
    if threat.pos.x >= player.pos.x {
        input.left = true;
    } else {
        input.right = true;
    }

    // A jump covers this much slope; take off so the obstacle sits mid-jump
    let jump_reach = state.tuning.jump_speed * state.tuning.jump_duration;
    let gap = player.pos.y - threat.pos.y;
    if threat.kind.jumpable() && !player.jumping && gap < jump_reach / 2.0 {
        input.jump = true;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use crate::sim::step;
    use glam::Vec2;

    fn place(state: &mut SimulationState, offset: Vec2, kind: ObstacleKind) {
        let size = state.tuning.obstacle_size(kind);
        state.obstacles.push(Obstacle {
            pos: state.player.pos + offset,
            kind,
            size,
        });
    }

    #[test]
    fn test_idle_with_clear_slope() {
        let state = SimulationState::new(5);
        assert_eq!(autopilot_input(&state), StepInput::default());
    }

    #[test]
    fn test_steers_away_from_threat() {
        let mut state = SimulationState::new(5);
        place(&mut state, Vec2::new(10.0, -400.0), ObstacleKind::Aerial);
        let input = autopilot_input(&state);
        assert!(input.left && !input.right);
        assert!(!input.jump);

        let mut state = SimulationState::new(5);
        place(&mut state, Vec2::new(-10.0, -400.0), ObstacleKind::Aerial);
        let input = autopilot_input(&state);
        assert!(input.right && !input.left);
    }

    #[test]
    fn test_ignores_distant_lanes_and_obstacles_behind() {
        let mut state = SimulationState::new(5);
        place(&mut state, Vec2::new(600.0, -300.0), ObstacleKind::Aerial);
        place(&mut state, Vec2::new(0.0, 300.0), ObstacleKind::Aerial);
        assert!(nearest_threat(&state).is_none());
    }

    #[test]
    fn test_jumps_close_ground_obstacle() {
        let mut state = SimulationState::new(5);
        place(&mut state, Vec2::new(0.0, -150.0), ObstacleKind::Ground);
        assert!(autopilot_input(&state).jump);
    }

    #[test]
    fn test_confirms_when_dead() {
        let mut state = SimulationState::new(5);
        state.player.alive = false;
        assert!(autopilot_input(&state).confirm);
    }

    #[test]
    fn test_survives_early_run() {
        let mut state = SimulationState::new(2024);
        for _ in 0..600 {
            let input = autopilot_input(&state);
            step(&mut state, &input, 1.0 / 60.0);
        }
        assert!(state.score() > 0);
        assert_eq!(state.frame, 600);
    }
}
