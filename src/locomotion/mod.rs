//! Input-driven movement and facing selection.
//!
//! This module holds the host-agnostic half of the walk controller: the types
//! that describe one frame of directional input, the velocity it produces and
//! the animation command that goes with it. Nothing here touches the ECS world
//! or raylib beyond its `Vector2` math type, so it can be driven by any
//! runtime that implements [`WalkHost`].
//!
//! - [`velocity`] – resolves the four direction flags into a speed-bounded vector
//! - [`rules`] – ordered walk/idle rule lists (first match wins)
//! - [`host`] – the command surface the controller talks to each frame
//!
//! The controller itself lives in
//! [`WalkController`](crate::components::walkcontroller::WalkController).

pub mod host;
pub mod rules;
pub mod velocity;

use serde::{Deserialize, Serialize};

pub use host::WalkHost;
pub use rules::{Axis, IdleRule, InputCondition, Sign, WalkRule};
pub use velocity::resolve_velocity;

use raylib::prelude::Vector2;

/// Walking speed in world units per second used when nothing else is configured.
pub const DEFAULT_WALK_SPEED: f32 = 175.0;

/// One of the four directional inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Directional input sampled once per frame.
///
/// The flags are independent; any combination is valid. Priority between
/// opposing directions is decided by the consumer, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    /// Input with no direction held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Input with only `direction` held.
    pub fn only(direction: Direction) -> Self {
        Self::none().with(direction)
    }

    /// Return a copy with `direction` also held.
    pub fn with(mut self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
        self
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// True when no direction is held.
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Every one of the 16 possible input combinations.
    pub fn all_combinations() -> impl Iterator<Item = DirectionalInput> {
        (0u8..16).map(|bits| DirectionalInput {
            up: bits & 0b0001 != 0,
            down: bits & 0b0010 != 0,
            left: bits & 0b0100 != 0,
            right: bits & 0b1000 != 0,
        })
    }
}

/// Which way the character is drawn facing.
///
/// `Front` faces the viewer (moving down the screen), `Back` faces away
/// (moving up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    Front,
    Back,
}

/// Animation outcome of one frame.
///
/// `Walk` plays the looping walk cycle for a facing. `Idle` stops playback;
/// `Idle(None)` means no idle pose could be derived and the current frame
/// stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCommand {
    Walk(Facing),
    Idle(Option<Facing>),
}

/// Everything the controller decided for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    pub velocity: Vector2,
    pub animation: AnimationCommand,
}
