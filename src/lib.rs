#![warn(missing_docs)]

//! Rotary dial widgets with host-agnostic input and geometry.

pub use kurbo;
pub use nalgebra as math;

pub use dialkit_core as core;
pub use dialkit_widgets as widgets;

/// A "prelude" for users of the dialkit crates.
///
/// Importing this module brings into scope the most common types needed
/// to drive a dial from a host shell.
///
/// ```rust
/// use dialkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::angle;
    pub use crate::core::dial::{DialRange, DialRangeError};
    pub use crate::core::input::{NavKey, ScrollDelta, StepDirection, StepMagnitude};
    pub use crate::core::signal::{MaybeSignal, StateSignal};
    pub use crate::core::update::Update;
    pub use crate::widgets::geometry::KnobGeometry;
    pub use crate::widgets::knob::Knob;
}
