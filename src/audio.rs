//! Audio cues
//!
//! Playback itself belongs to an external audio backend behind [`AudioSink`].
//! The [`AudioDirector`] turns simulation events into cues; the simulation
//! never waits on audio.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Tracks the game plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Looping soundtrack
    BackgroundMusic,
    /// One-shot sting on wipeout
    DeathStinger,
}

/// Sending half of a [`Completion`], fired by the backend when playback ends
#[derive(Debug)]
pub struct CompletionSignal(Sender<()>);

impl CompletionSignal {
    pub fn complete(self) {
        // The waiting side may already be gone; nothing to report then
        let _ = self.0.send(());
    }
}

/// One-shot "playback finished" notification
#[derive(Debug)]
pub struct Completion {
    rx: Receiver<()>,
    done: bool,
}

impl Completion {
    pub fn channel() -> (CompletionSignal, Completion) {
        let (tx, rx) = mpsc::channel();
        (CompletionSignal(tx), Completion { rx, done: false })
    }

    /// A completion that has already fired
    pub fn finished() -> Self {
        let (signal, completion) = Self::channel();
        signal.complete();
        completion
    }

    /// Poll without blocking. A dropped signal counts as finished.
    pub fn is_done(&mut self) -> bool {
        if !self.done {
            self.done = match self.rx.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => true,
                Err(TryRecvError::Empty) => false,
            };
        }
        self.done
    }

    /// Block the calling thread until playback ends
    pub fn wait(self) {
        if !self.done {
            // Err means the backend dropped the signal: playback is over either way
            let _ = self.rx.recv();
        }
    }
}

/// Audio backend
pub trait AudioSink {
    /// Start a track looping forever
    fn play_looped(&mut self, track: Track, volume: f32);
    /// Play a track once; the returned completion fires when it ends
    fn play_once(&mut self, track: Track, volume: f32) -> Completion;
}

/// Backend that plays nothing and finishes every track immediately
#[derive(Debug, Default)]
pub struct SilentAudio {
    /// Every track requested, in order
    pub played: Vec<Track>,
}

impl AudioSink for SilentAudio {
    fn play_looped(&mut self, track: Track, volume: f32) {
        log::debug!("Looping {track:?} at volume {volume:.2}");
        self.played.push(track);
    }

    fn play_once(&mut self, track: Track, volume: f32) -> Completion {
        log::debug!("Playing {track:?} at volume {volume:.2}");
        self.played.push(track);
        Completion::finished()
    }
}

/// Maps game events to audio cues
#[derive(Debug)]
pub struct AudioDirector {
    music_volume: f32,
    sfx_volume: f32,
    music_started: bool,
    stinger: Option<Completion>,
}

impl AudioDirector {
    pub fn new(settings: &Settings) -> Self {
        Self {
            music_volume: settings.effective_music_volume(),
            sfx_volume: settings.effective_sfx_volume(),
            music_started: false,
            stinger: None,
        }
    }

    /// Start the soundtrack (once)
    pub fn start_music<A: AudioSink>(&mut self, sink: &mut A) {
        if self.music_started {
            return;
        }
        self.music_started = true;
        if self.music_volume > 0.0 {
            sink.play_looped(Track::BackgroundMusic, self.music_volume);
        }
    }

    /// React to the events of the last step
    pub fn handle_events<A: AudioSink>(&mut self, events: &[GameEvent], sink: &mut A) {
        for event in events {
            if let GameEvent::Died { .. } = event {
                if self.sfx_volume > 0.0 {
                    self.stinger = Some(sink.play_once(Track::DeathStinger, self.sfx_volume));
                }
            }
        }
    }

    /// Whether the death stinger is still playing
    pub fn stinger_playing(&mut self) -> bool {
        let playing = self.stinger.as_mut().is_some_and(|c| !c.is_done());
        if !playing {
            self.stinger = None;
        }
        playing
    }

    /// Block until any pending stinger has finished
    pub fn finish(&mut self) {
        if let Some(completion) = self.stinger.take() {
            completion.wait();
        }
    }
}
