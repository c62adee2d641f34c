use crate::angle;
use thiserror::Error;

/// Default start angle in degrees (bottom-left).
pub const DEFAULT_START_ANGLE: f64 = -135.0;

/// Default end angle in degrees (bottom-right), giving a 270° sweep.
pub const DEFAULT_END_ANGLE: f64 = 135.0;

/// Error returned when constructing a [DialRange] from unusable bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialRangeError {
    /// The lower bound must leave room below the upper bound.
    #[error("empty dial range: min ({min}) must be less than max ({max})")]
    EmptyRange {
        /// The rejected lower bound.
        min: f64,
        /// The rejected upper bound.
        max: f64,
    },
}

/// Value bounds and angular sweep of a circular control.
///
/// Angles are in degrees, `0` pointing up and positive values going
/// clockwise. `start_angle` and `end_angle` may be given in any range and
/// are normalized before use; coincident angles span the full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct DialRange {
    /// Lower value bound.
    pub min: f64,
    /// Upper value bound.
    pub max: f64,
    /// Angle where the sweep begins.
    pub start_angle: f64,
    /// Angle where the sweep ends.
    pub end_angle: f64,
    /// Treat the value range as circular: values past one bound re-enter
    /// at the other, and the sweep has no dead zone.
    pub wrapping: bool,
}

impl DialRange {
    /// Creates a non-wrapping range over `[min, max]` with the default
    /// 270° sweep.
    ///
    /// `min` must be strictly less than `max`; a zero-width or inverted
    /// range is rejected here so no later mapping has to divide by zero.
    pub fn new(min: f64, max: f64) -> Result<Self, DialRangeError> {
        if min >= max {
            return Err(DialRangeError::EmptyRange { min, max });
        }

        Ok(Self {
            min,
            max,
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            wrapping: false,
        })
    }

    /// Clockwise angular span of the control, in `(0, 360]`.
    pub fn sweep(&self) -> f64 {
        angle::sweep_degrees(self.start_angle, self.end_angle)
    }

    /// Midpoint of the value range.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Brings `value` into `[min, max]`: clamped at the bounds, or shifted
    /// by whole turns of the range when wrapping.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.wrapping {
            let span = self.max - self.min;
            let mut value = value;
            while value < self.min {
                value += span;
            }
            while value > self.max {
                value -= span;
            }
            value
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Position of `value` within the range as a ratio in `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        (self.clamp(value) - self.min) / (self.max - self.min)
    }

    /// Maps a pointer angle (degrees, convention of
    /// [angle_from_point](crate::angle::angle_from_point)) to a value.
    ///
    /// Wrapping controls map the full circle continuously. Non-wrapping
    /// controls resolve an angle in the dead zone to the nearer boundary:
    /// the half adjoining the end snaps to `max`, the half adjoining the
    /// start snaps to `min`.
    pub fn value_from_angle(&self, degrees: f64) -> f64 {
        let start = angle::normalize_degrees(self.start_angle);
        let sweep = self.sweep();

        let mut relative = angle::normalize_degrees(angle::normalize_degrees(degrees) - start);
        if !self.wrapping && relative > sweep {
            let dead_zone = 360.0 - sweep;
            relative = if relative < sweep + dead_zone / 2.0 {
                log::trace!("pointer at {degrees}° past the end boundary, snapping to max");
                sweep
            } else {
                log::trace!("pointer at {degrees}° before the start boundary, snapping to min");
                0.0
            };
        }

        let mut ratio = relative / sweep;
        if ratio > 1.0 {
            // Guards float rounding at the boundary.
            ratio %= 1.0;
        }

        self.min + ratio * (self.max - self.min)
    }

    /// Angle of `value` on the dial, normalized to `[0, 360)`.
    pub fn angle_of(&self, value: f64) -> f64 {
        let start = angle::normalize_degrees(self.start_angle);
        angle::normalize_degrees(start + self.ratio(value) * self.sweep())
    }

    /// `count` evenly spaced angles across the sweep, first and last on
    /// the boundaries.
    pub fn tick_angles(&self, count: usize) -> Vec<f64> {
        let start = angle::normalize_degrees(self.start_angle);
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let sweep = self.sweep();
                (0..count)
                    .map(|i| {
                        let tick_ratio = i as f64 / (count - 1) as f64;
                        angle::normalize_degrees(start + tick_ratio * sweep)
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_new_rejects_empty_range() {
        assert_eq!(
            DialRange::new(5.0, 5.0),
            Err(DialRangeError::EmptyRange { min: 5.0, max: 5.0 })
        );
        assert!(DialRange::new(10.0, 0.0).is_err());
        assert!(DialRange::new(0.0, 100.0).is_ok());
    }

    #[test]
    fn test_default_sweep() {
        let range = DialRange::new(0.0, 100.0).unwrap();
        assert_close(range.sweep(), 270.0);
    }

    #[test]
    fn test_clamp_bounded() {
        let range = DialRange::new(0.0, 100.0).unwrap();
        assert_eq!(range.clamp(-10.0), 0.0);
        assert_eq!(range.clamp(150.0), 100.0);
        assert_eq!(range.clamp(42.0), 42.0);
    }

    #[test]
    fn test_clamp_wrapping() {
        let mut range = DialRange::new(0.0, 100.0).unwrap();
        range.wrapping = true;
        assert_close(range.clamp(-10.0), 90.0);
        assert_close(range.clamp(110.0), 10.0);
        assert_close(range.clamp(-230.0), 70.0);
        assert_close(range.clamp(350.0), 50.0);
    }

    #[test]
    fn test_value_from_angle_boundaries() {
        let mut range = DialRange::new(0.0, 100.0).unwrap();
        range.start_angle = 0.0;
        range.end_angle = 180.0;

        assert_close(range.value_from_angle(0.0), 0.0);
        assert_close(range.value_from_angle(90.0), 50.0);
        assert_close(range.value_from_angle(180.0), 100.0);
    }

    #[test]
    fn test_value_from_angle_dead_zone_bisection() {
        // 270° sweep: the dead zone covers 135°..225°, split at 180°.
        let range = DialRange::new(0.0, 100.0).unwrap();

        assert_close(range.value_from_angle(150.0), 100.0);
        assert_close(range.value_from_angle(179.0), 100.0);
        assert_close(range.value_from_angle(181.0), 0.0);
        assert_close(range.value_from_angle(210.0), 0.0);
    }

    #[test]
    fn test_value_from_angle_wrapping_has_no_dead_zone() {
        let mut range = DialRange::new(0.0, 100.0).unwrap();
        range.start_angle = 0.0;
        range.end_angle = 180.0;
        range.wrapping = true;

        // 270° is halfway through what would be the dead zone of the
        // non-wrapping control; wrapping maps it continuously instead.
        assert_close(range.value_from_angle(270.0), 50.0);
        assert_close(range.value_from_angle(315.0), 75.0);
    }

    #[test]
    fn test_angle_of_round_trip() {
        let range = DialRange::new(0.0, 100.0).unwrap();
        assert_close(range.angle_of(0.0), 225.0);
        assert_close(range.angle_of(50.0), 0.0);
        assert_close(range.angle_of(100.0), 135.0);

        for value in [5.0, 25.0, 62.5, 99.0] {
            assert_close(range.value_from_angle(range.angle_of(value)), value);
        }
    }

    #[test]
    fn test_coincident_angles_span_full_circle() {
        let mut range = DialRange::new(0.0, 360.0).unwrap();
        range.start_angle = 0.0;
        range.end_angle = 0.0;

        assert_close(range.sweep(), 360.0);
        assert_close(range.value_from_angle(180.0), 180.0);
        assert_close(range.value_from_angle(359.0), 359.0);
    }

    #[test]
    fn test_tick_angles() {
        let mut range = DialRange::new(0.0, 100.0).unwrap();
        range.start_angle = 0.0;
        range.end_angle = 180.0;

        assert!(range.tick_angles(0).is_empty());
        assert_eq!(range.tick_angles(1), vec![0.0]);

        let ticks = range.tick_angles(5);
        assert_eq!(ticks.len(), 5);
        assert_close(ticks[0], 0.0);
        assert_close(ticks[2], 90.0);
        assert_close(ticks[4], 180.0);
    }

    #[test]
    fn test_tick_angles_default_sweep_boundaries() {
        let range = DialRange::new(0.0, 100.0).unwrap();
        let ticks = range.tick_angles(11);
        assert_eq!(ticks.len(), 11);
        assert_close(ticks[0], 225.0);
        assert_close(ticks[10], 135.0);
    }
}
