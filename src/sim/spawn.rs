//! Obstacle spawning and the difficulty ramp

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, Obstacle, ObstacleKind, SimulationState};
use crate::tuning::Tuning;

/// Pick an obstacle kind, 50/50
pub fn roll_kind<R: Rng>(rng: &mut R) -> ObstacleKind {
    if rng.random_bool(0.5) {
        ObstacleKind::Aerial
    } else {
        ObstacleKind::Ground
    }
}

/// Horizontal offset from the player, uniform in `[-width, width)`
pub fn roll_offset<R: Rng>(rng: &mut R, width: f32) -> f32 {
    rng.random_range(-width..width)
}

/// Next spawn interval after one spawn
pub fn ramp_difficulty(difficulty: f32, tuning: &Tuning) -> f32 {
    (difficulty - tuning.difficulty_decay).max(tuning.difficulty_floor)
}

/// Spawn an obstacle if the spawn interval has elapsed.
///
/// Returns true when an obstacle was added.
pub fn spawn_if_due(state: &mut SimulationState) -> bool {
    if state.time_since_last_obstacle <= state.difficulty {
        return false;
    }

    let offset = roll_offset(&mut state.rng, state.tuning.window_size.x);
    let kind = roll_kind(&mut state.rng);
    let pos = state.player.pos + Vec2::new(offset, -state.tuning.spawn_distance);
    state.obstacles.push(Obstacle {
        pos,
        kind,
        size: state.tuning.obstacle_size(kind),
    });

    state.time_since_last_obstacle = 0.0;
    state.difficulty = ramp_difficulty(state.difficulty, &state.tuning);
    state.events.push(GameEvent::ObstacleSpawned { kind, pos });
    log::debug!(
        "Spawned {:?} at ({:.0}, {:.0}), next in {:.2}s",
        kind,
        pos.x,
        pos.y,
        state.difficulty
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_ramp_one_step() {
        let tuning = Tuning::default();
        let d = ramp_difficulty(1.0, &tuning);
        assert!((d - 0.99).abs() < 1e-6);
    }

    #[test]
    fn test_ramp_floors_after_76_spawns() {
        let tuning = Tuning::default();
        let mut d = tuning.initial_difficulty;
        for _ in 0..76 {
            d = ramp_difficulty(d, &tuning);
        }
        assert_eq!(d, 0.25);
        for _ in 0..100 {
            d = ramp_difficulty(d, &tuning);
            assert_eq!(d, 0.25);
        }
    }

    #[test]
    fn test_offsets_stay_in_window_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..10_000 {
            let x = roll_offset(&mut rng, 1024.0);
            assert!((-1024.0..1024.0).contains(&x));
        }
    }

    #[test]
    fn test_both_kinds_appear() {
        let mut rng = Pcg32::seed_from_u64(7);
        let kinds: Vec<_> = (0..200).map(|_| roll_kind(&mut rng)).collect();
        assert!(kinds.contains(&ObstacleKind::Ground));
        assert!(kinds.contains(&ObstacleKind::Aerial));
    }

    #[test]
    fn test_spawn_waits_for_interval() {
        let mut state = SimulationState::new(3);
        state.time_since_last_obstacle = 1.0;
        assert!(!spawn_if_due(&mut state));
        assert!(state.obstacles.is_empty());

        state.time_since_last_obstacle = 1.01;
        assert!(spawn_if_due(&mut state));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.time_since_last_obstacle, 0.0);

        let obstacle = &state.obstacles[0];
        assert_eq!(obstacle.pos.y, state.player.pos.y - 700.0);
        assert!((obstacle.pos.x - state.player.pos.x).abs() < 1024.0);
        assert_eq!(obstacle.size, state.tuning.obstacle_size(obstacle.kind));
    }
}
