//! Debug toggle resource.
//!
//! The mere presence of this resource means the hitbox overlay is enabled.
//! The render step checks for it every frame; the
//! [`switch_debug_observer`](crate::events::switchdebug::switch_debug_observer)
//! inserts or removes it.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws hitboxes and pivots.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
