//! Shared 2D camera resources.
//!
//! [`Camera2DRes`] wraps raylib's [`Camera2D`] so that systems agree on a
//! single world/screen transform. [`CameraPan`] switches on direct keyboard
//! scrolling for scenes without a followed entity.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
///
/// The camera's `offset` is the screen centre, so `target` is the world
/// point shown in the middle of the screen.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera centred on `target` for a `screen_w` × `screen_h` view.
    pub fn centered(target: Vector2, screen_w: f32, screen_h: f32) -> Self {
        Self(Camera2D {
            target,
            offset: Vector2 {
                x: screen_w * 0.5,
                y: screen_h * 0.5,
            },
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}

/// When present, the arrow keys scroll the camera at `speed` world units per second.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraPan {
    pub speed: f32,
}
