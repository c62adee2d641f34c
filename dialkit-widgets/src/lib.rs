#![warn(missing_docs)]

//! Widget library for dialkit => See `dialkit` crate.
//!
//! Contains the rotary dial widgets and their layout projection.

/// Contains the [knob::Knob] widget.
pub mod knob;

/// Contains the [geometry::KnobGeometry] layout projector.
pub mod geometry;
