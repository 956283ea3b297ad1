//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and write the current frame
//! - [`camera`] – follow the player or pan with the arrow keys, clamped to the map
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw world and debug overlays using Raylib
//! - [`time`] – update simulation time and delta
//! - [`walkcontroller`] – drive walk controllers from the input state

pub mod animation;
pub mod camera;
pub mod input;
pub mod movement;
pub mod render;
pub mod time;
pub mod walkcontroller;
