//! Presentation layer
//!
//! The window, textures and fonts belong to an external toolkit. This module
//! defines the calls the game makes against it and the exact order in which a
//! frame is drawn.

pub mod recording;
pub mod sprites;

pub use recording::{DrawCommand, RecordingSink};
pub use sprites::{AssetProvider, FixedSizeAssets, SpriteHandle, SpriteSheet};

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::SimulationState;

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Slope background
    pub const BLUE_VIOLET: Color = Color::rgb(138, 43, 226);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Rendering backend driven once per frame
pub trait PresentationSink {
    /// World-space offset of the bottom-left corner of the view
    fn set_camera(&mut self, offset: Vec2);
    fn clear(&mut self, color: Color);
    /// Draw a sprite centered on `position` (world space)
    fn draw_sprite(&mut self, sprite: SpriteHandle, position: Vec2);
    /// Draw text with its origin at `position` (world space)
    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32, color: Color);
    /// Flip buffers
    fn present(&mut self);
}

/// Score text sits this far in from the top-right corner of the view
const SCORE_INSET: Vec2 = Vec2::new(274.0, 43.0);
const SCORE_SCALE: f32 = 2.0;
const BANNER_SCALE: f32 = 4.0;
pub const DEATH_BANNER: &str = "DEAD!!!!";

/// Score label as shown on screen
pub fn score_label(score: u64) -> String {
    format!("Score: {score}")
}

/// Draw one frame: background, obstacles in pool order, player on top, then
/// the death banner and score, then a single present.
pub fn render_frame<S: PresentationSink>(
    sink: &mut S,
    state: &SimulationState,
    sprites: &SpriteSheet,
    settings: &Settings,
) {
    sink.set_camera(state.camera);
    sink.clear(Color::BLUE_VIOLET);

    for obstacle in &state.obstacles {
        sink.draw_sprite(sprites.obstacle(obstacle.kind), obstacle.pos);
    }
    sink.draw_sprite(sprites.player(state.player.visual), state.player.pos);

    if state.is_dead() {
        sink.draw_text(DEATH_BANNER, state.player.pos, BANNER_SCALE, Color::WHITE);
    }

    if settings.show_score {
        let anchor = state.camera + state.tuning.window_size - SCORE_INSET;
        sink.draw_text(&score_label(state.score()), anchor, SCORE_SCALE, Color::BLACK);
    }

    sink.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, ObstacleKind, VisualState};

    fn sheet() -> SpriteSheet {
        let mut assets = FixedSizeAssets::default();
        SpriteSheet::load(&mut assets).unwrap()
    }

    #[test]
    fn test_frame_order() {
        let sprites = sheet();
        let mut state = SimulationState::new(1);
        for (i, kind) in [ObstacleKind::Ground, ObstacleKind::Aerial].into_iter().enumerate() {
            state.obstacles.push(Obstacle {
                pos: Vec2::new(i as f32 * 100.0, -500.0),
                kind,
                size: state.tuning.obstacle_size(kind),
            });
        }

        let mut sink = RecordingSink::default();
        render_frame(&mut sink, &state, &sprites, &Settings::default());

        assert_eq!(
            sink.commands,
            vec![
                DrawCommand::Camera(state.camera),
                DrawCommand::Clear(Color::BLUE_VIOLET),
                DrawCommand::Sprite(sprites.obstacle(ObstacleKind::Ground), Vec2::new(0.0, -500.0)),
                DrawCommand::Sprite(sprites.obstacle(ObstacleKind::Aerial), Vec2::new(100.0, -500.0)),
                DrawCommand::Sprite(sprites.player(VisualState::Forward), state.player.pos),
                DrawCommand::Text("Score: 0".to_string(), Vec2::new(750.0, 525.0)),
                DrawCommand::Present,
            ]
        );
    }

    #[test]
    fn test_dead_frame_has_banner_and_wipeout() {
        let sprites = sheet();
        let mut state = SimulationState::new(1);
        state.player.alive = false;
        state.player.visual = VisualState::Wipeout;

        let mut sink = RecordingSink::default();
        let settings = Settings {
            show_score: false,
            ..Default::default()
        };
        render_frame(&mut sink, &state, &sprites, &settings);

        assert_eq!(sink.frames, 1);
        assert!(sink.commands.contains(&DrawCommand::Sprite(
            sprites.player(VisualState::Wipeout),
            state.player.pos
        )));
        assert_eq!(sink.texts(), vec![DEATH_BANNER]);
        assert_eq!(sink.commands.last(), Some(&DrawCommand::Present));
    }
}
