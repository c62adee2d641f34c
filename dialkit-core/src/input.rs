//! Host-agnostic input vocabulary consumed by the widgets.
//!
//! The host shell translates its own pointer, keyboard and scroll events
//! into these types; no windowing dependency is involved.

/// Navigation keys a dial reacts to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Arrow up; increases the value by one step.
    Up,
    /// Arrow down; decreases the value by one step.
    Down,
    /// Arrow left; decreases the value by one step.
    Left,
    /// Arrow right; increases the value by one step.
    Right,
    /// Increases the value by ten steps.
    PageUp,
    /// Decreases the value by ten steps.
    PageDown,
    /// Jumps to the lower bound.
    Home,
    /// Jumps to the upper bound.
    End,
}

/// Direction of a discrete value step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Step toward the upper bound.
    Increase,
    /// Step toward the lower bound.
    Decrease,
}

/// Magnitude of a discrete value step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMagnitude {
    /// One step.
    Normal,
    /// Ten steps.
    Large,
    /// Jump to the lower bound, regardless of direction.
    ToMin,
    /// Jump to the upper bound, regardless of direction.
    ToMax,
}

/// Scroll wheel movement, in notches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    /// Horizontal notches.
    pub x: f64,
    /// Vertical notches; positive scrolls up.
    pub y: f64,
}

impl ScrollDelta {
    /// Creates a scroll delta.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
