//! Kinematic body component.
//!
//! The [`RigidBody`] stores the velocity the movement system integrates into
//! [`MapPosition`](super::mapposition::MapPosition) every frame. It is the
//! "physics" side of the walk host: the controller writes its velocity and
//! reads it back on the next frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity.
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Zero the velocity on one axis, used when the body is stopped by a boundary.
    pub fn block_x(&mut self) {
        self.velocity.x = 0.0;
    }

    pub fn block_y(&mut self) {
        self.velocity.y = 0.0;
    }
}
