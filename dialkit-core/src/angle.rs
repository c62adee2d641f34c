use kurbo::Point;

/// Reduces any finite angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Angle of `point` as seen from `center`, in degrees clockwise from the
/// upward direction, normalized to `[0, 360)`.
///
/// Screen coordinates: Y grows downward. `point == center` yields `0.0`.
pub fn angle_from_point(center: Point, point: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    normalize_degrees(dx.atan2(-dy).to_degrees())
}

/// Projects an angle (same convention as [angle_from_point]) back onto the
/// circle of `radius` around `center`.
pub fn point_at_angle(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = (degrees - 90.0).to_radians();
    Point::new(
        center.x + radians.cos() * radius,
        center.y + radians.sin() * radius,
    )
}

/// Clockwise span from `start` to `end` in degrees, in `(0, 360]`.
///
/// Coincident angles are read as a full circle, not an empty one.
pub fn sweep_degrees(start: f64, end: f64) -> f64 {
    let sweep = normalize_degrees(end) - normalize_degrees(start);
    if sweep <= 0.0 {
        sweep + 360.0
    } else {
        sweep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-135.0), 225.0);
        assert_eq!(normalize_degrees(495.0), 135.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert!((normalize_degrees(-725.0) - 355.0).abs() < EPS);
    }

    #[test]
    fn test_angle_from_point_compass() {
        let center = Point::new(50.0, 50.0);

        // North, east, south, west in screen coordinates.
        assert!((angle_from_point(center, Point::new(50.0, 0.0)) - 0.0).abs() < EPS);
        assert!((angle_from_point(center, Point::new(100.0, 50.0)) - 90.0).abs() < EPS);
        assert!((angle_from_point(center, Point::new(50.0, 100.0)) - 180.0).abs() < EPS);
        assert!((angle_from_point(center, Point::new(0.0, 50.0)) - 270.0).abs() < EPS);
    }

    #[test]
    fn test_angle_from_point_degenerate() {
        let center = Point::new(10.0, 10.0);
        assert_eq!(angle_from_point(center, center), 0.0);
    }

    #[test]
    fn test_point_angle_round_trip() {
        let center = Point::new(60.0, 40.0);
        for degrees in [0.0, 45.0, 90.0, 135.0, 225.0, 300.0, 359.0] {
            let point = point_at_angle(center, 25.0, degrees);
            assert!((angle_from_point(center, point) - degrees).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sweep_degrees() {
        assert_eq!(sweep_degrees(0.0, 180.0), 180.0);
        assert_eq!(sweep_degrees(-135.0, 135.0), 270.0);
        assert_eq!(sweep_degrees(135.0, -135.0), 90.0);
        // Coincident angles span the whole circle.
        assert_eq!(sweep_degrees(0.0, 0.0), 360.0);
        assert_eq!(sweep_degrees(90.0, 450.0), 360.0);
    }
}
