//! Presentation sink that records draw calls instead of drawing

use glam::Vec2;

use super::{Color, PresentationSink, SpriteHandle};

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Camera(Vec2),
    Clear(Color),
    Sprite(SpriteHandle, Vec2),
    Text(String, Vec2),
    Present,
}

/// Keeps the commands of the most recent frame
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
    pending: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Text drawn in the last presented frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for RecordingSink {
    fn set_camera(&mut self, offset: Vec2) {
        self.pending.push(DrawCommand::Camera(offset));
    }

    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: SpriteHandle, position: Vec2) {
        self.pending.push(DrawCommand::Sprite(sprite, position));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _scale: f32, _color: Color) {
        self.pending.push(DrawCommand::Text(text.to_string(), position));
    }

    fn present(&mut self) {
        self.pending.push(DrawCommand::Present);
        self.commands = std::mem::take(&mut self.pending);
        self.frames += 1;
        log::trace!("Frame {} presented ({} commands)", self.frames, self.commands.len());
    }
}
