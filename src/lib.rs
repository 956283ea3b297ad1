//! Tilewalk library.
//!
//! Input-driven walking for a top-down character: the pure
//! [`locomotion`] rules plus the ECS components, resources, systems, and
//! events that host them. Exposed as a library for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod locomotion;
pub mod resources;
pub mod systems;
