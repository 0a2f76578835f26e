use crate::segment::LineSegment;

/// Returns the value of the curve at `x`, using the first of
/// `curve[..segment_count]` whose span contains `x`. Returns `None` if no
/// segment contains `x`.
///
/// A segment's span is `[min(x1, x2), max(x1, x2)]` widened by
/// [`TOLERANCE`](crate::TOLERANCE), whatever the direction of its slope.
/// Where two segments share an endpoint, a query at that endpoint is
/// answered by whichever segment comes first in `curve`. `segment_count`
/// larger than `curve.len()` is clamped.
///
/// # Examples
///
/// ```
/// use sensor_curve::{evaluate, train, LineSegment};
///
/// let mut curve = [LineSegment::default(); 2];
/// train(&[0.0, 10.0, 20.0], &[0.0, 100.0, 50.0], 3, &mut curve).unwrap();
///
/// assert_eq!(evaluate(5.0, &curve, 2), Some(50.0));
/// assert_eq!(evaluate(15.0, &curve, 2), Some(75.0));
/// assert_eq!(evaluate(25.0, &curve, 2), None);
/// ```
pub fn evaluate(x: f32, curve: &[LineSegment], segment_count: usize) -> Option<f32> {
    curve
        .iter()
        .take(segment_count)
        .find(|segment| segment.contains(x))
        .map(|segment| segment.value_at(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{train, TOLERANCE};

    fn curve<const LENGTH: usize>(x_values: &[f32], y_values: &[f32]) -> [LineSegment; LENGTH] {
        let mut curve = [LineSegment::default(); LENGTH];
        train(x_values, y_values, x_values.len(), &mut curve).unwrap();
        curve
    }

    fn ascending() -> [LineSegment; 2] {
        curve(&[0.0, 10.0, 20.0], &[0.0, 100.0, 50.0])
    }

    fn descending() -> [LineSegment; 2] {
        curve(&[20.0, 10.0, 0.0], &[50.0, 100.0, 0.0])
    }

    #[test]
    fn matching_exact_values() {
        for curve in [ascending(), descending()] {
            assert_eq!(evaluate(0.0, &curve, 2), Some(0.0));
            assert_eq!(evaluate(10.0, &curve, 2), Some(100.0));
            assert_eq!(evaluate(20.0, &curve, 2), Some(50.0));
        }
    }

    #[test]
    fn interpolates() {
        for curve in [ascending(), descending()] {
            assert_eq!(evaluate(5.0, &curve, 2), Some(50.0));
            assert_eq!(evaluate(15.0, &curve, 2), Some(75.0));
            assert_eq!(evaluate(12.0, &curve, 2), Some(90.0));
        }
    }

    #[test]
    fn outside_range() {
        for curve in [ascending(), descending()] {
            assert_eq!(evaluate(-1.0, &curve, 2), None);
            assert_eq!(evaluate(-1e-3, &curve, 2), None);
            assert_eq!(evaluate(20.001, &curve, 2), None);
            assert_eq!(evaluate(25.0, &curve, 2), None);
            assert_eq!(evaluate(f32::NAN, &curve, 2), None);
            assert_eq!(evaluate(f32::INFINITY, &curve, 2), None);
        }
    }

    #[test]
    fn within_tolerance_of_edge() {
        let curve = ascending();
        let value = evaluate(-TOLERANCE / 2.0, &curve, 2).unwrap();
        assert!(value.abs() < 1e-4);
    }

    #[test]
    fn respects_segment_count() {
        let curve = ascending();

        assert_eq!(evaluate(5.0, &curve, 1), Some(50.0));
        assert_eq!(evaluate(15.0, &curve, 1), None);
        assert_eq!(evaluate(5.0, &curve, 0), None);
        assert_eq!(evaluate(15.0, &curve, 10), Some(75.0));
        assert_eq!(evaluate(5.0, &[], 3), None);
    }

    #[test]
    fn first_match_wins() {
        // x doubles back, so every segment covers 5.0.
        let curve: [LineSegment; 3] = curve(&[0.0, 10.0, 0.0, 10.0], &[0.0, 10.0, 30.0, 40.0]);

        assert_eq!(evaluate(5.0, &curve, 3), Some(5.0));
        assert_eq!(evaluate(5.0, &curve[1..], 2), Some(20.0));
        assert_eq!(evaluate(10.0, &curve, 3), Some(10.0));
    }

    #[test]
    fn reconstructs_samples() {
        let x_values: [f32; 7] = [114.34, 88.381, 68.915, 53.65, 42.889, 34.196, 27.445];
        let y_values: [f32; 7] = [-30.0, -25.0, -20.0, -15.0, -10.0, -5.0, 0.0];
        let curve: [LineSegment; 6] = curve(&x_values, &y_values);

        for (x, y) in x_values.iter().zip(y_values) {
            let value = evaluate(*x, &curve, 6).unwrap();
            assert!((value - y).abs() < 1e-3, "expected {}, got {}", y, value);
        }

        let value = evaluate(53.0, &curve, 6).unwrap();
        assert!(value > -15.0 && value < -10.0);
    }
}
