//! Animation playback system.
//!
//! [`animation`] advances every playing [`Animation`] based on elapsed time
//! and writes the current frame key into the entity's [`Sprite`].
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`]
//! 2. Entities have an [`Animation`] component pointing to a key
//! 3. Something (usually the walk controller) calls [`Animation::play`] / [`Animation::stop`]
//! 4. This system advances frames at the animation's `frame_rate` and updates [`Sprite::frame_key`]
//!
//! Stopped animations are left alone, so a static frame written into the
//! sprite stays on screen.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the delta.
/// - Looks up animation data from [`AnimationStore`]; unknown keys are skipped.
/// - Looping animations wrap to frame 0, others hold the last frame and stop.
/// - All frames due this tick are applied in one step, however high the rate.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        if !anim_comp.playing {
            continue;
        }
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        let frame_count = animation.frame_count();
        if frame_count == 0 {
            continue;
        }
        if anim_comp.frame_index >= frame_count {
            anim_comp.frame_index = 0;
        }

        if animation.frame_rate > 0.0 && animation.frame_rate.is_finite() {
            let frame_duration = 1.0 / animation.frame_rate;
            anim_comp.elapsed_time += time.delta;

            if anim_comp.elapsed_time >= frame_duration {
                let due = (anim_comp.elapsed_time / frame_duration).floor();
                anim_comp.elapsed_time = (anim_comp.elapsed_time - due * frame_duration)
                    .clamp(0.0, frame_duration);
                // saturating float to int cast
                let steps = due as usize;

                if anim_comp.looped {
                    anim_comp.frame_index = (anim_comp.frame_index + steps % frame_count) % frame_count;
                } else if steps < frame_count - anim_comp.frame_index {
                    anim_comp.frame_index += steps;
                } else {
                    // stay on last frame
                    anim_comp.frame_index = frame_count - 1;
                    anim_comp.stop();
                }
            }
        }

        let frame_key = &animation.frames[anim_comp.frame_index];
        if sprite.frame_key != *frame_key {
            sprite.frame_key.clone_from(frame_key);
        }
    }
}
