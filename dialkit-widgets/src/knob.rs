use dialkit_core::angle;
use dialkit_core::dial::{DialRange, DialRangeError};
use dialkit_core::input::{NavKey, ScrollDelta, StepDirection, StepMagnitude};
use dialkit_core::signal::{MaybeSignal, StateSignal};
use dialkit_core::update::Update;
use kurbo::Point;
use nalgebra::Vector2;

/// Callback invoked with the value after a change.
pub type ChangeCallback = Box<dyn Fn(f64)>;

/// A rotary dial widget for selecting a value within a range, in the
/// manner of a potentiometer or volume knob.
///
/// The host shell drives the knob through:
/// - pointer dragging along a circular path ([Knob::dragged])
/// - tapping a position ([Knob::tapped])
/// - navigation keys while focused ([Knob::typed_key])
/// - the scroll wheel while hovered ([Knob::scrolled])
///
/// Every interaction method returns an [Update] telling the host what to
/// refresh; [Update::empty] means the value did not change.
///
/// `on_changed` fires on every accepted value change. `on_change_ended`
/// fires when an interaction settles: on [Knob::drag_end], and after a
/// tap, key press or scroll notch that changed the value.
///
/// ```
/// use dialkit_widgets::knob::Knob;
///
/// let mut knob = Knob::new(0.0, 100.0)?.with_on_changed(|value| {
///     println!("value changed to {value:.1}");
/// });
/// knob.set_value(75.0);
/// assert_eq!(knob.value(), 75.0);
/// # Ok::<(), dialkit_core::dial::DialRangeError>(())
/// ```
pub struct Knob {
    /// Value bounds and angular sweep.
    pub range: DialRange,
    /// Increment for discrete adjustments; `0.0` selects 1% of the range.
    pub step: f64,
    /// Number of tick marks around the dial; `0` disables them.
    pub tick_count: usize,
    /// Project a filled wedge from the start angle to the current value.
    pub show_wedge: bool,
    value: MaybeSignal<f64>,
    on_changed: Option<ChangeCallback>,
    on_change_ended: Option<ChangeCallback>,
    hovered: bool,
    focused: bool,
    disabled: bool,
}

impl Knob {
    /// Creates a knob over `[min, max]` with the value at the midpoint, a
    /// 1% step, 11 tick marks and the default 270° sweep.
    pub fn new(min: f64, max: f64) -> Result<Self, DialRangeError> {
        let range = DialRange::new(min, max)?;
        let value = MaybeSignal::value(range.midpoint());

        Ok(Self {
            range,
            step: 0.0,
            tick_count: 11,
            show_wedge: false,
            value,
            on_changed: None,
            on_change_ended: None,
            hovered: false,
            focused: false,
            disabled: false,
        })
    }

    /// Replaces the value storage and returns itself.
    ///
    /// Pass a [StateSignal] to connect the knob to outside state; plain
    /// values stay private to the widget. Out-of-range values are
    /// normalized on read, not rejected.
    pub fn with_value(mut self, value: impl Into<MaybeSignal<f64>>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the step increment and returns itself.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the angular sweep and returns itself.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.range.start_angle = start_angle;
        self.range.end_angle = end_angle;
        self
    }

    /// Enables or disables value wrapping and returns itself.
    pub fn with_wrapping(mut self, wrapping: bool) -> Self {
        self.range.wrapping = wrapping;
        self
    }

    /// Sets the number of tick marks and returns itself.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Enables the filled wedge behind the active arc and returns itself.
    pub fn with_wedge(mut self, show_wedge: bool) -> Self {
        self.show_wedge = show_wedge;
        self
    }

    /// Sets the function called with every accepted value change and
    /// returns itself.
    pub fn with_on_changed(mut self, on_changed: impl Fn(f64) + 'static) -> Self {
        self.on_changed = Some(Box::new(on_changed));
        self
    }

    /// Sets the function called when an interaction settles and returns
    /// itself.
    pub fn with_on_change_ended(mut self, on_change_ended: impl Fn(f64) + 'static) -> Self {
        self.on_change_ended = Some(Box::new(on_change_ended));
        self
    }

    /// Sets the function called with every accepted value change.
    pub fn set_on_changed(&mut self, on_changed: impl Fn(f64) + 'static) {
        self.on_changed = Some(Box::new(on_changed));
    }

    /// Sets the function called when an interaction settles.
    pub fn set_on_change_ended(&mut self, on_change_ended: impl Fn(f64) + 'static) {
        self.on_change_ended = Some(Box::new(on_change_ended));
    }

    /// The current value, always within `[min, max]`.
    ///
    /// A bound signal may have been driven out of range by outside code;
    /// the stored value is normalized on read.
    pub fn value(&self) -> f64 {
        self.range.clamp(*self.value.get())
    }

    /// Angle of the current value on the dial, in degrees, for rendering.
    pub fn current_angle(&self) -> f64 {
        self.range.angle_of(self.value())
    }

    /// Tick angles for the configured [tick_count](Knob::tick_count).
    pub fn tick_angles(&self) -> Vec<f64> {
        self.range.tick_angles(self.tick_count)
    }

    /// The effective step increment: the configured one, or 1% of the
    /// range for the `0.0` sentinel.
    pub fn effective_step(&self) -> f64 {
        if self.step == 0.0 {
            (self.range.max - self.range.min) / 100.0
        } else {
            self.step
        }
    }

    /// Whether the pointer is over the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the widget has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the widget ignores value-changing input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the value, clamping or wrapping it into range.
    ///
    /// Storing a value identical to the current one is a no-op: nothing
    /// fires and [Update::empty] is returned. Otherwise the new value is
    /// stored, `on_changed` fires and [Update::DRAW] is returned.
    /// `on_change_ended` is never fired from here; it belongs to the
    /// interaction that settles.
    pub fn set_value(&mut self, value: f64) -> Update {
        let value = self.range.clamp(value);
        if value == self.value() {
            return Update::empty();
        }

        self.value.set(value);
        log::trace!("knob value set to {value}");

        if let Some(on_changed) = &self.on_changed {
            on_changed(value);
        }

        Update::DRAW
    }

    /// Sets the value from a pointer position within a widget of `size`.
    ///
    /// The dial center is the center of `size`; the pointer angle is
    /// mapped through the sweep and dead-zone policy of the range.
    pub fn set_value_from_point(&mut self, point: Point, size: Vector2<f64>) -> Update {
        let center = Point::new(size.x / 2.0, size.y / 2.0);
        let degrees = angle::angle_from_point(center, point);
        self.set_value(self.range.value_from_angle(degrees))
    }

    /// Applies a discrete step.
    ///
    /// A step is a settled interaction: `on_change_ended` fires whenever
    /// the value changed.
    pub fn step_by(&mut self, direction: StepDirection, magnitude: StepMagnitude) -> Update {
        if self.disabled {
            return Update::empty();
        }

        let update = match magnitude {
            StepMagnitude::ToMin => self.set_value(self.range.min),
            StepMagnitude::ToMax => self.set_value(self.range.max),
            StepMagnitude::Normal | StepMagnitude::Large => {
                let factor = if magnitude == StepMagnitude::Large {
                    10.0
                } else {
                    1.0
                };
                let step = self.effective_step() * factor;
                let delta = match direction {
                    StepDirection::Increase => step,
                    StepDirection::Decrease => -step,
                };
                let current = self.value();
                self.set_value(current + delta)
            }
        };

        if update.contains(Update::DRAW) {
            self.fire_change_ended();
        }

        update
    }

    /// Handles a drag move.
    ///
    /// Dragging is continuous: `on_change_ended` waits for
    /// [Knob::drag_end].
    pub fn dragged(&mut self, point: Point, size: Vector2<f64>) -> Update {
        if self.disabled {
            return Update::empty();
        }

        self.set_value_from_point(point, size)
    }

    /// Ends a drag gesture, firing `on_change_ended`.
    pub fn drag_end(&mut self) {
        self.fire_change_ended();
    }

    /// Handles a tap, jumping the value to the tapped position.
    ///
    /// A tap is a complete interaction: `on_change_ended` fires when the
    /// value changed.
    pub fn tapped(&mut self, point: Point, size: Vector2<f64>) -> Update {
        if self.disabled {
            return Update::empty();
        }

        let update = self.set_value_from_point(point, size);
        if update.contains(Update::DRAW) {
            self.fire_change_ended();
        }

        update
    }

    /// Handles a navigation key while focused.
    pub fn typed_key(&mut self, key: NavKey) -> Update {
        match key {
            NavKey::Up | NavKey::Right => {
                self.step_by(StepDirection::Increase, StepMagnitude::Normal)
            }
            NavKey::Down | NavKey::Left => {
                self.step_by(StepDirection::Decrease, StepMagnitude::Normal)
            }
            NavKey::PageUp => self.step_by(StepDirection::Increase, StepMagnitude::Large),
            NavKey::PageDown => self.step_by(StepDirection::Decrease, StepMagnitude::Large),
            NavKey::Home => self.step_by(StepDirection::Decrease, StepMagnitude::ToMin),
            NavKey::End => self.step_by(StepDirection::Increase, StepMagnitude::ToMax),
        }
    }

    /// Handles a scroll notch; each notch is a settled single step.
    pub fn scrolled(&mut self, delta: ScrollDelta) -> Update {
        if delta.y > 0.0 {
            self.step_by(StepDirection::Increase, StepMagnitude::Normal)
        } else if delta.y < 0.0 {
            self.step_by(StepDirection::Decrease, StepMagnitude::Normal)
        } else {
            Update::empty()
        }
    }

    /// Pointer entered the widget.
    pub fn mouse_in(&mut self) -> Update {
        if self.hovered {
            return Update::empty();
        }
        self.hovered = true;
        Update::DRAW
    }

    /// Pointer left the widget.
    pub fn mouse_out(&mut self) -> Update {
        if !self.hovered {
            return Update::empty();
        }
        self.hovered = false;
        Update::DRAW
    }

    /// Keyboard focus arrived.
    pub fn focus_gained(&mut self) -> Update {
        if self.focused {
            return Update::empty();
        }
        self.focused = true;
        Update::DRAW
    }

    /// Keyboard focus left.
    pub fn focus_lost(&mut self) -> Update {
        if !self.focused {
            return Update::empty();
        }
        self.focused = false;
        Update::DRAW
    }

    /// Re-enables interaction.
    pub fn enable(&mut self) -> Update {
        if !self.disabled {
            return Update::empty();
        }
        self.disabled = false;
        Update::DRAW
    }

    /// Makes the widget ignore all value-changing input until
    /// [Knob::enable].
    pub fn disable(&mut self) -> Update {
        if self.disabled {
            return Update::empty();
        }
        self.disabled = true;
        Update::DRAW
    }

    /// Adopts `signal` as the value storage.
    ///
    /// Interactions write into the signal, notifying its listeners;
    /// outside writes through the signal are what the knob reads back.
    pub fn bind(&mut self, signal: StateSignal<f64>) {
        log::debug!("knob bound to external signal, current value {}", *signal.get());
        self.value = MaybeSignal::Signal(signal);
    }

    /// Detaches from a bound signal, keeping its last value.
    pub fn unbind(&mut self) {
        let current = *self.value.get();
        self.value = MaybeSignal::value(current);
    }

    fn fire_change_ended(&self) {
        if let Some(on_change_ended) = &self.on_change_ended {
            on_change_ended(self.value());
        }
    }
}
