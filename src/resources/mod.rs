//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, camera and
//! configuration.
//!
//! Overview
//! - `animationstore` – frame-key animations reused across entities
//! - `camera2d` – shared 2D camera and keyboard panning settings
//! - `debugmode` – presence toggles the hitbox overlay
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `screensize` – current framebuffer dimensions in pixels
//! - `worldbounds` – size of the playable map
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod worldbounds;
pub mod worldtime;
