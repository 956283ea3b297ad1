//! Velocity resolution from directional input.
//!
//! Opposing directions do not cancel: left wins over right and up wins over
//! down. When both axes end up non-zero the vector is rescaled so diagonal
//! movement is exactly as fast as axis-aligned movement.

use raylib::prelude::Vector2;

use super::DirectionalInput;

/// Resolve a frame of input into a velocity whose length never exceeds `speed`.
///
/// Screen coordinates: negative `y` is up.
pub fn resolve_velocity(input: DirectionalInput, speed: f32) -> Vector2 {
    let mut velocity = Vector2 { x: 0.0, y: 0.0 };

    if input.left {
        velocity.x = -speed;
    } else if input.right {
        velocity.x = speed;
    }

    if input.up {
        velocity.y = -speed;
    } else if input.down {
        velocity.y = speed;
    }

    if velocity.x != 0.0 && velocity.y != 0.0 {
        velocity = velocity.normalized() * speed;
    }

    velocity
}
