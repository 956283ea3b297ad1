//! Camera systems.
//!
//! - [`camera_follow_system`] centres the camera on the [`CameraTarget`] entity.
//! - [`camera_pan_system`] scrolls the camera with the arrow keys when
//!   [`CameraPan`] is present.
//!
//! Both keep the view inside the [`WorldBounds`] when the resource exists.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::locomotion::resolve_velocity;
use crate::resources::camera2d::{Camera2DRes, CameraPan};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

/// Clamp a camera target so a `view` sized window (world units) centred on it
/// stays within `bounds`. On an axis where the map is smaller than the view
/// the map is centred instead.
pub fn clamp_camera_target(desired: Vector2, view: Vector2, bounds: &WorldBounds) -> Vector2 {
    Vector2 {
        x: clamp_axis(desired.x, view.x * 0.5, bounds.width()),
        y: clamp_axis(desired.y, view.y * 0.5, bounds.height()),
    }
}

fn clamp_axis(value: f32, half_view: f32, limit: f32) -> f32 {
    if limit <= half_view * 2.0 {
        limit * 0.5
    } else {
        value.clamp(half_view, limit - half_view)
    }
}

/// Visible world size for the current screen and zoom.
fn view_size(camera: &Camera2DRes, screen: &ScreenSize) -> Vector2 {
    let zoom = if camera.0.zoom > 0.0 { camera.0.zoom } else { 1.0 };
    Vector2 {
        x: screen.w as f32 / zoom,
        y: screen.h as f32 / zoom,
    }
}

/// Centre the camera on the first [`CameraTarget`].
pub fn camera_follow_system(
    query: Query<&MapPosition, With<CameraTarget>>,
    mut camera: ResMut<Camera2DRes>,
    screen: Res<ScreenSize>,
    bounds: Option<Res<WorldBounds>>,
) {
    let Some(target) = query.iter().next() else {
        return;
    };
    let target = match bounds.as_ref() {
        Some(bounds) => clamp_camera_target(target.pos, view_size(&camera, &screen), bounds),
        None => target.pos,
    };
    camera.0.target = target;
    camera.0.offset = Vector2 {
        x: screen.w as f32 * 0.5,
        y: screen.h as f32 * 0.5,
    };
}

/// Scroll the camera with the movement keys.
pub fn camera_pan_system(
    pan: Res<CameraPan>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut camera: ResMut<Camera2DRes>,
    screen: Res<ScreenSize>,
    bounds: Option<Res<WorldBounds>>,
) {
    let step = resolve_velocity(input.directional(), pan.speed).scale_by(time.delta);
    let desired = camera.0.target + step;
    let target = match bounds.as_ref() {
        Some(bounds) => clamp_camera_target(desired, view_size(&camera, &screen), bounds),
        None => desired,
    };
    camera.0.target = target;
}
