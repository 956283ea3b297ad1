use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Sprite is identified by the key of the frame currently shown, its size in world
/// units and a tint used by the placeholder renderer.
/// The origin selects the pivot point (in pixels) relative to the sprite's top-left
/// used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub frame_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
    pub tint: Color,
}

impl Sprite {
    pub fn new(frame_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            frame_key: frame_key.into(),
            width,
            height,
            origin: Vector2 { x: 0.0, y: 0.0 },
            tint: Color::WHITE,
        }
    }

    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}
