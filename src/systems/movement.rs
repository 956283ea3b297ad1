//! Movement integration.
//!
//! Integrates [`RigidBody`] velocity into [`MapPosition`] using the scaled
//! frame delta. Bodies with a [`BoxCollider`] are then pushed back inside the
//! [`WorldBounds`], and the velocity on each blocked axis is zeroed so the
//! next frame sees the body as stopped on that axis.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&BoxCollider>)>,
    time: Res<WorldTime>,
    bounds: Option<Res<WorldBounds>>,
) {
    for (mut position, mut rigidbody, maybe_collider) in query.iter_mut() {
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos = position.pos + delta;

        let (Some(bounds), Some(collider)) = (bounds.as_ref(), maybe_collider) else {
            continue;
        };
        let (min, max) = collider.aabb(position.pos);
        let push = bounds.push_inside(min, max);
        if push.x != 0.0 {
            position.pos.x += push.x;
            rigidbody.block_x();
        }
        if push.y != 0.0 {
            position.pos.y += push.y;
            rigidbody.block_y();
        }
    }
}
