//! Frame loop driver
//!
//! Owns the simulation state and the external collaborators and runs
//! input → step → render → audio, strictly in sequence, once per frame.

use crate::audio::{AudioDirector, AudioSink};
use crate::error::StartupError;
use crate::platform::{Clock, InputSource};
use crate::renderer::{AssetProvider, PresentationSink, SpriteSheet, render_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, SimulationState, StepInput, autopilot_input, step};
use crate::tuning::Tuning;

/// What happened over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub deaths: u32,
    /// Best score reached this session
    pub best_score: u64,
}

/// A running game
pub struct Game<C: Clock, I, P, A> {
    state: SimulationState,
    sprites: SpriteSheet,
    settings: Settings,
    director: AudioDirector,
    clock: C,
    last_frame: C::Instant,
    input: I,
    sink: P,
    audio: A,
    autopilot: bool,
    summary: RunSummary,
}

impl<C, I, P, A> Game<C, I, P, A>
where
    C: Clock,
    I: InputSource,
    P: PresentationSink,
    A: AudioSink,
{
    /// Load sprites and set up a fresh run. Sprite frame sizes become the
    /// collision extents.
    #[allow(clippy::too_many_arguments)]
    pub fn new<S: AssetProvider>(
        seed: u64,
        mut tuning: Tuning,
        settings: Settings,
        assets: &mut S,
        clock: C,
        input: I,
        sink: P,
        audio: A,
    ) -> Result<Self, StartupError> {
        let sprites = SpriteSheet::load(assets)?;
        sprites.apply_sizes(&mut tuning);
        let state = SimulationState::with_tuning(seed, tuning)?;

        let last_frame = clock.now();
        log::info!("New run with seed {seed}");
        Ok(Self {
            state,
            director: AudioDirector::new(&settings),
            sprites,
            settings,
            clock,
            last_frame,
            input,
            sink,
            audio,
            autopilot: false,
            summary: RunSummary::default(),
        })
    }

    /// Let the autopilot steer instead of the input source
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Run one frame. Returns false once the session has been closed.
    pub fn frame(&mut self) -> bool {
        self.input.poll();
        if self.input.close_requested() {
            return false;
        }

        let now = self.clock.now();
        let dt = self.clock.seconds_elapsed(self.last_frame, now);
        self.last_frame = now;

        let mut input = if self.autopilot {
            autopilot_input(&self.state)
        } else {
            self.input.snapshot()
        };
        // The wipeout sting plays out before the run can restart
        if input.confirm && self.state.is_dead() && self.director.stinger_playing() {
            input.confirm = false;
        }
        self.advance(&input, dt);
        true
    }

    fn advance(&mut self, input: &StepInput, dt: f32) {
        step(&mut self.state, input, dt);
        render_frame(&mut self.sink, &self.state, &self.sprites, &self.settings);
        self.director.handle_events(&self.state.events, &mut self.audio);

        self.summary.frames += 1;
        for event in &self.state.events {
            if let GameEvent::Died { score } = event {
                self.summary.deaths += 1;
                self.summary.best_score = self.summary.best_score.max(*score);
            }
        }
        if !self.state.is_dead() {
            self.summary.best_score = self.summary.best_score.max(self.state.score());
        }
    }

    /// Run until the session closes or `max_frames` frames have been played
    pub fn run(&mut self, max_frames: Option<u64>) -> RunSummary {
        self.director.start_music(&mut self.audio);

        while max_frames.is_none_or(|max| self.summary.frames < max) {
            if !self.frame() {
                log::info!("Session closed");
                break;
            }
        }

        // Let a wipeout sting finish before tearing down
        self.director.finish();
        log::info!(
            "Played {} frames, {} wipeouts, best score {}",
            self.summary.frames,
            self.summary.deaths,
            self.summary.best_score
        );
        self.summary
    }
}
