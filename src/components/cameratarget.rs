use bevy_ecs::prelude::Component;

/// Marker: the camera follows this entity.
///
/// When several entities carry it, the first one returned by the query wins.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
