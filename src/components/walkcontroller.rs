//! Keyboard-driven walking with directional animation.
//!
//! [`WalkController`] turns one frame of directional input into a velocity
//! and an animation command. It carries its own speed, the animation keys for
//! each facing and the ordered rule lists that decide which facing wins.
//!
//! The [`walk_controller_system`](crate::systems::walkcontroller::walk_controller_system)
//! drives it against ECS components, but [`WalkController::drive`] accepts any
//! [`WalkHost`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::locomotion::rules::{
    default_idle_rules, default_walk_rules, select_idle, select_walk,
};
use crate::locomotion::{
    AnimationCommand, DEFAULT_WALK_SPEED, DirectionalInput, Facing, FramePlan, IdleRule,
    WalkHost, WalkRule, resolve_velocity,
};

/// Animation and frame keys used for each facing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkAnimations {
    pub walk_left: String,
    pub walk_right: String,
    pub walk_front: String,
    pub walk_back: String,
    pub idle_left: String,
    pub idle_right: String,
    pub idle_front: String,
    pub idle_back: String,
}

impl Default for WalkAnimations {
    fn default() -> Self {
        Self {
            walk_left: "walk-left".into(),
            walk_right: "walk-right".into(),
            walk_front: "walk-front".into(),
            walk_back: "walk-back".into(),
            idle_left: "idle-left".into(),
            idle_right: "idle-right".into(),
            idle_front: "idle-front".into(),
            idle_back: "idle-back".into(),
        }
    }
}

impl WalkAnimations {
    pub fn walk_key(&self, facing: Facing) -> &str {
        match facing {
            Facing::Left => &self.walk_left,
            Facing::Right => &self.walk_right,
            Facing::Front => &self.walk_front,
            Facing::Back => &self.walk_back,
        }
    }

    pub fn idle_key(&self, facing: Facing) -> &str {
        match facing {
            Facing::Left => &self.idle_left,
            Facing::Right => &self.idle_right,
            Facing::Front => &self.idle_front,
            Facing::Back => &self.idle_back,
        }
    }
}

/// Per-entity walk controller.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct WalkController {
    /// Speed in world units per second. Velocity length never exceeds it.
    pub speed: f32,
    pub animations: WalkAnimations,
    /// Evaluated in order against the current input. First match wins.
    pub rules: Vec<WalkRule>,
    /// Evaluated in order against the previous velocity when no walk rule matched.
    pub idle_rules: Vec<IdleRule>,
}

impl Default for WalkController {
    fn default() -> Self {
        Self::new(DEFAULT_WALK_SPEED)
    }
}

impl WalkController {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            animations: WalkAnimations::default(),
            rules: default_walk_rules(),
            idle_rules: default_idle_rules(),
        }
    }

    pub fn with_animations(mut self, animations: WalkAnimations) -> Self {
        self.animations = animations;
        self
    }

    pub fn with_rules(mut self, rules: Vec<WalkRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_idle_rules(mut self, idle_rules: Vec<IdleRule>) -> Self {
        self.idle_rules = idle_rules;
        self
    }

    /// Pick the animation command for this frame.
    ///
    /// `previous_velocity` must be the velocity from before this frame's reset.
    pub fn select(&self, input: &DirectionalInput, previous_velocity: Vector2) -> AnimationCommand {
        match select_walk(&self.rules, input) {
            Some(facing) => AnimationCommand::Walk(facing),
            None => AnimationCommand::Idle(select_idle(&self.idle_rules, previous_velocity)),
        }
    }

    /// Decide velocity and animation for one frame without touching any host.
    pub fn plan(&self, input: DirectionalInput, previous_velocity: Vector2) -> FramePlan {
        FramePlan {
            velocity: resolve_velocity(input, self.speed),
            animation: self.select(&input, previous_velocity),
        }
    }

    /// Run one frame against `host`.
    ///
    /// The previous velocity is read before anything is written back, then
    /// exactly one velocity command and one animation command are issued.
    pub fn drive<H: WalkHost>(&self, host: &mut H) -> FramePlan {
        let previous_velocity = host.velocity();
        let input = host.read_input();
        let plan = self.plan(input, previous_velocity);

        host.set_velocity(plan.velocity);
        match plan.animation {
            AnimationCommand::Walk(facing) => {
                host.play_animation(self.animations.walk_key(facing), true);
            }
            AnimationCommand::Idle(facing) => {
                host.stop_animation();
                if let Some(facing) = facing {
                    host.set_static_frame(self.animations.idle_key(facing));
                }
            }
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locomotion::{Direction, InputCondition};

    #[derive(Debug, Clone, PartialEq)]
    enum HostCall {
        SetVelocity(f32, f32),
        Play(String, bool),
        Stop,
        StaticFrame(String),
    }

    struct RecordingHost {
        input: DirectionalInput,
        velocity: Vector2,
        calls: Vec<HostCall>,
    }

    impl RecordingHost {
        fn new(input: DirectionalInput, velocity: Vector2) -> Self {
            Self {
                input,
                velocity,
                calls: Vec::new(),
            }
        }

        fn velocity_calls(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, HostCall::SetVelocity(..)))
                .count()
        }

        fn animation_calls(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, HostCall::Play(..) | HostCall::Stop))
                .count()
        }
    }

    impl WalkHost for RecordingHost {
        fn read_input(&self) -> DirectionalInput {
            self.input
        }
        fn velocity(&self) -> Vector2 {
            self.velocity
        }
        fn set_velocity(&mut self, velocity: Vector2) {
            self.velocity = velocity;
            self.calls.push(HostCall::SetVelocity(velocity.x, velocity.y));
        }
        fn play_animation(&mut self, key: &str, looped: bool) {
            self.calls.push(HostCall::Play(key.to_string(), looped));
        }
        fn stop_animation(&mut self) {
            self.calls.push(HostCall::Stop);
        }
        fn set_static_frame(&mut self, key: &str) {
            self.calls.push(HostCall::StaticFrame(key.to_string()));
        }
    }

    fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }

    #[test]
    fn test_left_only_example() {
        let controller = WalkController::new(175.0);
        let mut host = RecordingHost::new(DirectionalInput::only(Direction::Left), zero());
        let plan = controller.drive(&mut host);

        assert_eq!(plan.animation, AnimationCommand::Walk(Facing::Left));
        assert_eq!(
            host.calls,
            vec![
                HostCall::SetVelocity(-175.0, 0.0),
                HostCall::Play("walk-left".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_one_velocity_and_one_animation_command_per_frame() {
        let controller = WalkController::default();
        let previous = [
            zero(),
            Vector2 { x: -175.0, y: 0.0 },
            Vector2 { x: 0.0, y: 175.0 },
        ];
        for input in DirectionalInput::all_combinations() {
            for prev in previous {
                let mut host = RecordingHost::new(input, prev);
                controller.drive(&mut host);
                assert_eq!(host.velocity_calls(), 1, "{input:?}");
                assert_eq!(host.animation_calls(), 1, "{input:?}");
                assert!(matches!(host.calls[0], HostCall::SetVelocity(..)));
            }
        }
    }

    #[test]
    fn test_release_after_walking_left_selects_idle_left() {
        let controller = WalkController::default();
        let mut host = RecordingHost::new(DirectionalInput::none(), Vector2 { x: -175.0, y: 0.0 });
        let plan = controller.drive(&mut host);

        assert_eq!(plan.animation, AnimationCommand::Idle(Some(Facing::Left)));
        assert_eq!(
            host.calls,
            vec![
                HostCall::SetVelocity(0.0, 0.0),
                HostCall::Stop,
                HostCall::StaticFrame("idle-left".to_string()),
            ]
        );
    }

    #[test]
    fn test_release_from_rest_keeps_current_frame() {
        let controller = WalkController::default();
        let mut host = RecordingHost::new(DirectionalInput::none(), zero());
        let plan = controller.drive(&mut host);

        assert_eq!(plan.animation, AnimationCommand::Idle(None));
        assert!(
            !host
                .calls
                .iter()
                .any(|c| matches!(c, HostCall::StaticFrame(_)))
        );
        assert_eq!(host.calls, vec![HostCall::SetVelocity(0.0, 0.0), HostCall::Stop]);
    }

    #[test]
    fn test_idle_uses_previous_not_new_velocity() {
        // The new velocity is always zero when idle; only the snapshot can pick a pose.
        let controller = WalkController::default();
        let mut host = RecordingHost::new(DirectionalInput::none(), Vector2 { x: 0.0, y: -175.0 });
        controller.drive(&mut host);
        assert_eq!(host.velocity.x, 0.0);
        assert_eq!(host.velocity.y, 0.0);
        assert_eq!(host.calls.last(), Some(&HostCall::StaticFrame("idle-back".to_string())));
    }

    #[test]
    fn test_left_and_up_never_walks_back() {
        let controller = WalkController::default();
        let input = DirectionalInput::only(Direction::Left).with(Direction::Up);
        for prev in [zero(), Vector2 { x: 0.0, y: -175.0 }] {
            let plan = controller.plan(input, prev);
            assert_eq!(plan.animation, AnimationCommand::Walk(Facing::Left));
        }
    }

    #[test]
    fn test_walk_ignores_previous_velocity() {
        let controller = WalkController::default();
        let plan = controller.plan(
            DirectionalInput::only(Direction::Down),
            Vector2 { x: -175.0, y: 0.0 },
        );
        assert_eq!(plan.animation, AnimationCommand::Walk(Facing::Front));
        assert_eq!(plan.velocity.y, 175.0);
    }

    #[test]
    fn test_custom_animation_keys() {
        let animations = WalkAnimations {
            walk_left: "misa-left-walk".into(),
            idle_left: "misa-left".into(),
            ..WalkAnimations::default()
        };
        let controller = WalkController::default().with_animations(animations);

        let mut host = RecordingHost::new(DirectionalInput::only(Direction::Left), zero());
        controller.drive(&mut host);
        assert_eq!(host.calls[1], HostCall::Play("misa-left-walk".to_string(), true));

        let mut host = RecordingHost::new(DirectionalInput::none(), Vector2 { x: -175.0, y: 0.0 });
        controller.drive(&mut host);
        assert_eq!(host.calls[2], HostCall::StaticFrame("misa-left".to_string()));
    }

    #[test]
    fn test_custom_rules_are_used() {
        let controller = WalkController::default().with_rules(vec![WalkRule::new(
            InputCondition::Held(Direction::Up),
            Facing::Back,
        )]);
        let plan = controller.plan(
            DirectionalInput::only(Direction::Left).with(Direction::Up),
            zero(),
        );
        assert_eq!(plan.animation, AnimationCommand::Walk(Facing::Back));
        // velocity resolution is independent of the rule list
        assert!(plan.velocity.x < 0.0);
    }

    #[test]
    fn test_without_idle_rules_idle_never_sets_frame() {
        let controller = WalkController::default().with_idle_rules(Vec::new());
        let plan = controller.plan(DirectionalInput::none(), Vector2 { x: 175.0, y: 0.0 });
        assert_eq!(plan.animation, AnimationCommand::Idle(None));
    }

    #[test]
    fn test_walk_and_idle_keys_cover_every_facing() {
        let animations = WalkAnimations::default();
        for (facing, walk, idle) in [
            (Facing::Left, "walk-left", "idle-left"),
            (Facing::Right, "walk-right", "idle-right"),
            (Facing::Front, "walk-front", "idle-front"),
            (Facing::Back, "walk-back", "idle-back"),
        ] {
            assert_eq!(animations.walk_key(facing), walk);
            assert_eq!(animations.idle_key(facing), idle);
        }
    }
}
