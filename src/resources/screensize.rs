//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The camera systems
//! read it to know how much of the world is visible.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
