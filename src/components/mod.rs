//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – playback state for frame-key animations
//! - [`boxcollider`] – axis-aligned hitbox kept inside the world and drawn in debug mode
//! - [`cameratarget`] – marks the entity the camera follows
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – kinematic body storing velocity
//! - [`sprite`] – frame key and size of the drawn sprite
//! - [`walkcontroller`] – input-driven walking with directional animation
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod cameratarget;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
pub mod walkcontroller;
pub mod zindex;
