//! Sprite handles and the game's sprite sheet

use std::collections::HashMap;

use glam::Vec2;

use crate::error::StartupError;
use crate::sim::{ObstacleKind, VisualState};
use crate::tuning::Tuning;

/// Opaque reference to a loaded sprite plus its frame size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteHandle {
    pub id: u32,
    /// Frame width/height in world units
    pub size: Vec2,
}

/// Loads sprites by name. A missing sprite is a deployment error and aborts startup.
pub trait AssetProvider {
    fn load_sprite(&mut self, name: &str) -> Result<SpriteHandle, StartupError>;
}

/// Every sprite the game draws
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub forward: SpriteHandle,
    pub left: SpriteHandle,
    pub right: SpriteHandle,
    pub jump: SpriteHandle,
    pub jump_left: SpriteHandle,
    pub jump_right: SpriteHandle,
    pub wipeout: SpriteHandle,
    pub hard_drive: SpriteHandle,
    pub server_rack: SpriteHandle,
}

impl SpriteSheet {
    /// Asset names, in load order
    pub const NAMES: [&'static str; 9] = [
        "forward",
        "left",
        "right",
        "jump",
        "jumpleft",
        "jumpright",
        "wipeout",
        "harddrive",
        "serverrack",
    ];

    pub fn load<A: AssetProvider>(assets: &mut A) -> Result<Self, StartupError> {
        let sheet = Self {
            forward: assets.load_sprite("forward")?,
            left: assets.load_sprite("left")?,
            right: assets.load_sprite("right")?,
            jump: assets.load_sprite("jump")?,
            jump_left: assets.load_sprite("jumpleft")?,
            jump_right: assets.load_sprite("jumpright")?,
            wipeout: assets.load_sprite("wipeout")?,
            hard_drive: assets.load_sprite("harddrive")?,
            server_rack: assets.load_sprite("serverrack")?,
        };
        log::info!("Loaded {} sprites", Self::NAMES.len());
        Ok(sheet)
    }

    pub fn player(&self, visual: VisualState) -> SpriteHandle {
        match visual {
            VisualState::Forward => self.forward,
            VisualState::Left => self.left,
            VisualState::Right => self.right,
            VisualState::Jump => self.jump,
            VisualState::JumpLeft => self.jump_left,
            VisualState::JumpRight => self.jump_right,
            VisualState::Wipeout => self.wipeout,
        }
    }

    pub fn obstacle(&self, kind: ObstacleKind) -> SpriteHandle {
        match kind {
            ObstacleKind::Ground => self.hard_drive,
            ObstacleKind::Aerial => self.server_rack,
        }
    }

    /// Use the loaded frame sizes as collision extents
    pub fn apply_sizes(&self, tuning: &mut Tuning) {
        tuning.player_size = self.forward.size;
        tuning.ground_obstacle_size = self.hard_drive.size;
        tuning.aerial_obstacle_size = self.server_rack.size;
    }
}

/// In-memory asset provider with known frame sizes, for headless runs
#[derive(Debug, Clone)]
pub struct FixedSizeAssets {
    sizes: HashMap<String, Vec2>,
    next_id: u32,
}

impl FixedSizeAssets {
    pub fn new() -> Self {
        Self {
            sizes: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register (or replace) a sprite
    pub fn with_sprite(mut self, name: &str, size: Vec2) -> Self {
        self.sizes.insert(name.to_string(), size);
        self
    }

    /// The full sprite set sized from the tuning
    pub fn from_tuning(tuning: &Tuning) -> Self {
        let mut assets = Self::new();
        for name in SpriteSheet::NAMES {
            let size = match name {
                "harddrive" => tuning.ground_obstacle_size,
                "serverrack" => tuning.aerial_obstacle_size,
                _ => tuning.player_size,
            };
            assets = assets.with_sprite(name, size);
        }
        assets
    }
}

impl Default for FixedSizeAssets {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

impl AssetProvider for FixedSizeAssets {
    fn load_sprite(&mut self, name: &str) -> Result<SpriteHandle, StartupError> {
        let size = *self.sizes.get(name).ok_or_else(|| StartupError::MissingAsset {
            name: name.to_string(),
        })?;
        let id = self.next_id;
        self.next_id += 1;
        Ok(SpriteHandle { id, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_sheet() {
        let mut assets = FixedSizeAssets::default();
        let sheet = SpriteSheet::load(&mut assets).unwrap();
        assert_ne!(sheet.forward.id, sheet.wipeout.id);
        assert_eq!(sheet.obstacle(ObstacleKind::Aerial), sheet.server_rack);
        assert_eq!(sheet.player(VisualState::JumpLeft), sheet.jump_left);
    }

    #[test]
    fn test_missing_sprite_is_fatal() {
        let mut assets = FixedSizeAssets::new().with_sprite("forward", Vec2::splat(32.0));
        let err = SpriteSheet::load(&mut assets).unwrap_err();
        assert!(matches!(err, StartupError::MissingAsset { ref name } if name == "left"));
    }

    #[test]
    fn test_apply_sizes_updates_collision_extents() {
        let mut assets = FixedSizeAssets::default()
            .with_sprite("forward", Vec2::new(30.0, 50.0))
            .with_sprite("serverrack", Vec2::new(60.0, 150.0));
        let sheet = SpriteSheet::load(&mut assets).unwrap();

        let mut tuning = Tuning::default();
        sheet.apply_sizes(&mut tuning);
        assert_eq!(tuning.player_size, Vec2::new(30.0, 50.0));
        assert_eq!(tuning.aerial_obstacle_size, Vec2::new(60.0, 150.0));
        assert_eq!(
            tuning.obstacle_size(ObstacleKind::Ground),
            Vec2::from(crate::consts::GROUND_OBSTACLE_SIZE)
        );
    }
}
