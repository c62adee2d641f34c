#![warn(missing_docs)]

//! Core library for dialkit => See `dialkit` crate.
//!
//! Contains the angle/value mathematics, input vocabulary and reactive
//! signal system behind the dial widgets.

/// Contains angle primitives for circular controls.
pub mod angle;

/// Contains the [DialRange](dial::DialRange) angle/value mapper.
pub mod dial;

/// Contains host-agnostic input event types.
pub mod input;

/// Contains the signal system for reactive value binding.
pub mod signal;

/// Contains the [Update](update::Update) invalidation flags.
pub mod update;
