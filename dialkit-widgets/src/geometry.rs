use crate::knob::Knob;
use dialkit_core::angle;
use kurbo::{Arc, Circle, CircleSegment, Line, Point, Vec2};
use nalgebra::Vector2;

// Proportions of the dial diameter / track radius.
const TRACK_FRACTION: f64 = 0.85;
const INDICATOR_FRACTION: f64 = 0.9;
const WEDGE_FRACTION: f64 = 0.75;
const TICK_INNER_FRACTION: f64 = 0.95;
const TICK_OUTER_FRACTION: f64 = 1.1;

const THUMB_RADIUS: f64 = 4.0;
const THUMB_RADIUS_HOVERED: f64 = 6.0;
const CENTER_DOT_RADIUS: f64 = 6.0;
const INDICATOR_WIDTH: f64 = 3.0;
const INDICATOR_WIDTH_FOCUSED: f64 = 4.0;

/// Converts a dial angle (degrees clockwise from up) to the arc convention
/// of [kurbo] (radians from the positive X axis).
fn dial_to_arc_radians(degrees: f64) -> f64 {
    (degrees - 90.0).to_radians()
}

/// Screen geometry of a [Knob] at a given render size.
///
/// A pure projection of the widget state into [kurbo] primitives: the host
/// shell owns colors, brushes and the actual drawing. The dial is a square
/// of the smaller size dimension, centered in the given area.
#[derive(Debug, Clone)]
pub struct KnobGeometry {
    /// Background circle filling the dial.
    pub ring: Circle,
    /// The full usable sweep.
    pub track: Arc,
    /// The swept-out portion from the start angle to the current value.
    pub active: Arc,
    /// Filled wedge behind the active arc, when enabled on the knob.
    pub wedge: Option<CircleSegment>,
    /// Radial line from the center toward the current value.
    pub indicator: Line,
    /// Stroke width for the indicator; grows with keyboard focus.
    pub indicator_width: f64,
    /// Grab circle at the indicator tip; grows while hovered.
    pub thumb: Circle,
    /// Small circle over the dial center.
    pub center_dot: Circle,
    /// Tick marks across the sweep, boundaries included.
    pub ticks: Vec<Line>,
}

impl KnobGeometry {
    /// Smallest sensible render size, per side.
    pub const MIN_SIZE: f64 = 80.0;

    /// The minimum render size as a vector.
    pub fn min_size() -> Vector2<f64> {
        Vector2::new(Self::MIN_SIZE, Self::MIN_SIZE)
    }

    /// Projects `knob` into the area of `size`.
    pub fn layout(knob: &Knob, size: Vector2<f64>) -> Self {
        let diameter = size.x.min(size.y);
        let radius = diameter / 2.0;
        let center = Point::new(size.x / 2.0, size.y / 2.0);
        let track_radius = radius * TRACK_FRACTION;

        let start = angle::normalize_degrees(knob.range.start_angle);
        let sweep = knob.range.sweep();
        let swept = knob.range.ratio(knob.value()) * sweep;
        let current = start + swept;

        let track_radii = Vec2::new(track_radius, track_radius);
        let track = Arc::new(
            center,
            track_radii,
            dial_to_arc_radians(start),
            sweep.to_radians(),
            0.0,
        );
        let active = Arc::new(
            center,
            track_radii,
            dial_to_arc_radians(start),
            swept.to_radians(),
            0.0,
        );
        let wedge = knob.show_wedge.then(|| {
            CircleSegment::new(
                center,
                radius * WEDGE_FRACTION,
                0.0,
                dial_to_arc_radians(start),
                swept.to_radians(),
            )
        });

        let indicator_tip =
            angle::point_at_angle(center, track_radius * INDICATOR_FRACTION, current);
        let thumb_radius = if knob.is_hovered() {
            THUMB_RADIUS_HOVERED
        } else {
            THUMB_RADIUS
        };
        let indicator_width = if knob.is_focused() {
            INDICATOR_WIDTH_FOCUSED
        } else {
            INDICATOR_WIDTH
        };

        let ticks = knob
            .tick_angles()
            .into_iter()
            .map(|tick_angle| {
                Line::new(
                    angle::point_at_angle(center, track_radius * TICK_INNER_FRACTION, tick_angle),
                    angle::point_at_angle(center, track_radius * TICK_OUTER_FRACTION, tick_angle),
                )
            })
            .collect();

        Self {
            ring: Circle::new(center, radius),
            track,
            active,
            wedge,
            indicator: Line::new(center, indicator_tip),
            indicator_width,
            thumb: Circle::new(indicator_tip, thumb_radius),
            center_dot: Circle::new(center, CENTER_DOT_RADIUS),
            ticks,
        }
    }
}
