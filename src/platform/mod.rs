//! Platform abstraction layer
//!
//! Handles the outside world the game loop samples each frame:
//! - Time (frame deltas)
//! - Held keys and window close requests

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use crate::sim::StepInput;

/// Monotonic time source
pub trait Clock {
    type Instant: fmt::Debug + Copy;

    fn now(&self) -> Self::Instant;
    fn seconds_elapsed(&self, start: Self::Instant, end: Self::Instant) -> f32;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn seconds_elapsed(&self, start: Instant, end: Instant) -> f32 {
        end.saturating_duration_since(start).as_secs_f32()
    }
}

/// Clock that advances a fixed amount every time it is read
#[derive(Debug)]
pub struct SteppedClock {
    step: f64,
    reads: std::cell::Cell<u64>,
}

impl SteppedClock {
    pub fn new(step_seconds: f32) -> Self {
        Self {
            step: f64::from(step_seconds),
            reads: std::cell::Cell::new(0),
        }
    }
}

impl Clock for SteppedClock {
    type Instant = f64;

    fn now(&self) -> f64 {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        reads as f64 * self.step
    }

    fn seconds_elapsed(&self, start: f64, end: f64) -> f32 {
        (end - start).max(0.0) as f32
    }
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    /// Respawn (Enter)
    Confirm,
}

/// Keyboard/window state sampled once per frame
pub trait InputSource {
    fn is_held(&self, key: Key) -> bool;

    /// Window closed or session ended
    fn close_requested(&self) -> bool;

    /// Advance to the next frame's key state
    fn poll(&mut self) {}

    /// Collect this frame's keys
    fn snapshot(&self) -> StepInput {
        StepInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            jump: self.is_held(Key::Jump),
            confirm: self.is_held(Key::Confirm),
        }
    }
}

/// Replays a fixed list of per-frame key states, then requests close
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<StepInput>,
    current: Option<StepInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = StepInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            current: None,
        }
    }

    /// Hold the same keys for `count` frames
    pub fn repeat(input: StepInput, count: usize) -> Self {
        Self::new(std::iter::repeat_n(input, count))
    }
}

impl InputSource for ScriptedInput {
    fn is_held(&self, key: Key) -> bool {
        let Some(input) = &self.current else {
            return false;
        };
        match key {
            Key::Left => input.left,
            Key::Right => input.right,
            Key::Jump => input.jump,
            Key::Confirm => input.confirm,
        }
    }

    fn close_requested(&self) -> bool {
        self.current.is_none() && self.frames.is_empty()
    }

    fn poll(&mut self) {
        self.current = self.frames.pop_front();
    }
}
