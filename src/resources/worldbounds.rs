//! Playable area of the current scene.
//!
//! The map is a grid of `tiles_x` × `tiles_y` square tiles. Bodies are kept
//! inside it by the movement system and the camera never shows past its edges.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub tiles_x: u32,
    pub tiles_y: u32,
    /// Size of a tile in pixels.
    pub tile_size: u32,
}

impl WorldBounds {
    pub fn new(tiles_x: u32, tiles_y: u32, tile_size: u32) -> Self {
        Self {
            tiles_x,
            tiles_y,
            tile_size,
        }
    }

    /// Map width in pixels.
    pub fn width(&self) -> f32 {
        self.tiles_x as f32 * self.tile_size as f32
    }

    /// Map height in pixels.
    pub fn height(&self) -> f32 {
        self.tiles_y as f32 * self.tile_size as f32
    }

    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.width() * 0.5,
            y: self.height() * 0.5,
        }
    }

    /// Translation that moves the box `min..max` back inside the map.
    ///
    /// Returns zero on an axis where the box already fits or is larger than
    /// the map (then it is pinned to the top/left edge).
    pub fn push_inside(&self, min: Vector2, max: Vector2) -> Vector2 {
        Vector2 {
            x: push_axis(min.x, max.x, self.width()),
            y: push_axis(min.y, max.y, self.height()),
        }
    }
}

fn push_axis(min: f32, max: f32, limit: f32) -> f32 {
    if min < 0.0 {
        -min
    } else if max > limit {
        (limit - max).max(-min)
    } else {
        0.0
    }
}
