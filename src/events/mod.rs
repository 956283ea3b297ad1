//! Event types and observers used by the engine.
//!
//! Submodules:
//! - [`switchdebug`] – toggle the hitbox overlay on/off
pub mod switchdebug;
