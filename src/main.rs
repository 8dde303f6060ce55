//! SNOboard entry point
//!
//! The native binary runs a headless session: the autopilot rides a seeded
//! run at a fixed 60 Hz frame rate against recording/silent sinks and reports
//! the result. Windowed front-ends plug their own sinks into `Game`.
//!
//! Environment:
//! - `SNOBOARD_SEED`: run seed (default: current time)
//! - `SNOBOARD_TUNING`: path to a JSON tuning file
//! - `SNOBOARD_SETTINGS`: path to a JSON settings file
//! - `SNOBOARD_FRAMES`: frames to play (default: 3600)

use std::process::ExitCode;

use snoboard::{
    Game, Settings, StartupError, Tuning,
    audio::SilentAudio,
    game::RunSummary,
    platform::{ScriptedInput, SteppedClock},
    renderer::{FixedSizeAssets, RecordingSink},
    sim::StepInput,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: usize = 3600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("SNOboard (headless) starting...");

    match run() {
        Ok(summary) => {
            println!(
                "Rode {} frames: {} wipeouts, best score {}",
                summary.frames, summary.deaths, summary.best_score
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("snoboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<RunSummary, StartupError> {
    let seed = parse_seed(std::env::var("SNOBOARD_SEED").ok())?;

    let tuning = match std::env::var_os("SNOBOARD_TUNING") {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let settings = match std::env::var_os("SNOBOARD_SETTINGS") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let frames = parse_frame_count(std::env::var("SNOBOARD_FRAMES").ok())?;

    let mut assets = FixedSizeAssets::from_tuning(&tuning);
    let mut game = Game::new(
        seed,
        tuning,
        settings,
        &mut assets,
        SteppedClock::new(FRAME_DT),
        ScriptedInput::repeat(StepInput::default(), frames),
        RecordingSink::default(),
        SilentAudio::default(),
    )?;
    game.set_autopilot(true);
    Ok(game.run(None))
}

/// Run seed from the environment, or the current time
fn parse_seed(raw: Option<String>) -> Result<u64, StartupError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| StartupError::InvalidSeed(raw)),
        None => Ok(std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)),
    }
}

fn parse_frame_count(raw: Option<String>) -> Result<usize, StartupError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| StartupError::InvalidFrameCount(raw)),
        None => Ok(DEFAULT_FRAMES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_numbers() {
        assert_eq!(parse_seed(Some(" 42 ".into())).unwrap(), 42);
        assert_eq!(parse_frame_count(None).unwrap(), DEFAULT_FRAMES);
        assert_eq!(parse_frame_count(Some("120".into())).unwrap(), 120);
    }

    #[test]
    fn test_unparsable_env_numbers_are_fatal() {
        assert!(matches!(
            parse_seed(Some("abc".into())),
            Err(StartupError::InvalidSeed(raw)) if raw == "abc"
        ));
        assert!(matches!(
            parse_frame_count(Some("lots".into())),
            Err(StartupError::InvalidFrameCount(raw)) if raw == "lots"
        ));
    }
}
