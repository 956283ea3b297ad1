//! Walk controller system.
//!
//! Runs every [`WalkController`] once per frame against its entity's
//! components. [`EcsWalkHost`] is the glue: input comes from the shared
//! [`InputState`], velocity goes to the [`RigidBody`], animation commands go
//! to the [`Animation`] and the idle pose to the [`Sprite`].
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::walkcontroller::WalkController;
use crate::locomotion::{DirectionalInput, WalkHost};
use crate::resources::input::InputState;

/// [`WalkHost`] over one entity's components for the duration of a frame.
pub struct EcsWalkHost<'a> {
    pub input: &'a InputState,
    pub rigidbody: &'a mut RigidBody,
    pub animation: &'a mut Animation,
    pub sprite: &'a mut Sprite,
}

impl WalkHost for EcsWalkHost<'_> {
    fn read_input(&self) -> DirectionalInput {
        self.input.directional()
    }

    fn velocity(&self) -> Vector2 {
        self.rigidbody.velocity()
    }

    fn set_velocity(&mut self, velocity: Vector2) {
        self.rigidbody.set_velocity(velocity);
    }

    fn play_animation(&mut self, key: &str, looped: bool) {
        if self.animation.play(key, looped) {
            debug!("Playing animation '{}'", key);
        }
    }

    fn stop_animation(&mut self) {
        self.animation.stop();
    }

    fn set_static_frame(&mut self, key: &str) {
        self.sprite.frame_key.clear();
        self.sprite.frame_key.push_str(key);
    }
}

/// Drive every walk controller for this frame.
pub fn walk_controller_system(
    mut query: Query<(&WalkController, &mut RigidBody, &mut Animation, &mut Sprite)>,
    input: Res<InputState>,
) {
    for (controller, mut rigidbody, mut animation, mut sprite) in query.iter_mut() {
        let mut host = EcsWalkHost {
            input: &*input,
            rigidbody: &mut *rigidbody,
            animation: &mut *animation,
            sprite: &mut *sprite,
        };
        controller.drive(&mut host);
    }
}
