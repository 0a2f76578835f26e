use crate::builder::build;
use crate::error::{ArgumentError, TrainError};
use crate::evaluator::evaluate;
use crate::segment::LineSegment;

/// A curve with room for up to `CAPACITY` segments, built from up to
/// `CAPACITY + 1` samples.
///
/// Storage is inline, so a `Curve` can live in a `static`, on the stack,
/// or inside a driver struct without an allocator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Curve<const CAPACITY: usize> {
    segments: [LineSegment; CAPACITY],
    len: usize,
}

impl<const CAPACITY: usize> Curve<CAPACITY> {
    /// Returns an empty curve. Every point evaluates to `None`.
    pub const fn new() -> Self {
        Self {
            segments: [LineSegment {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: 0.0,
                slope: 0.0,
                intercept: 0.0,
            }; CAPACITY],
            len: 0,
        }
    }

    /// Returns a curve through `points`, given as `(x, y)` pairs in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_curve::Curve;
    ///
    /// // NTC thermistor: resistance (kΩ) -> temperature (°C)
    /// let curve: Curve<4> = Curve::from_points(&[
    ///     (42.889, -10.0),
    ///     (27.445, 0.0),
    ///     (18.01, 10.0),
    ///     (12.099, 20.0),
    ///     (8.309, 30.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(curve.len(), 4);
    /// assert!(curve.evaluate(30.0).is_some());
    /// assert_eq!(curve.evaluate(100.0), None);
    /// ```
    pub fn from_points(points: &[(f32, f32)]) -> Result<Self, TrainError> {
        let mut curve = Self::new();
        build(points.len(), |index| points[index], &mut curve.segments)?;
        curve.len = points.len() - 1;
        Ok(curve)
    }

    /// Replaces the curve with one trained on `x_values` and `y_values`.
    ///
    /// On error the curve is left empty rather than holding the previous
    /// calibration.
    ///
    /// # Errors
    ///
    /// As [`train`](crate::train), plus
    /// [`LengthMismatch`](ArgumentError::LengthMismatch) if the two slices
    /// differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_curve::{Curve, TrainError};
    ///
    /// let mut curve: Curve<8> = Curve::new();
    /// curve.train(&[0.0, 10.0, 20.0], &[0.0, 100.0, 50.0]).unwrap();
    /// assert_eq!(curve.evaluate(15.0), Some(75.0));
    ///
    /// assert_eq!(
    ///     curve.train(&[0.0, 0.0], &[1.0, 2.0]),
    ///     Err(TrainError::DegenerateSegment { index: 0 })
    /// );
    /// assert!(curve.is_empty());
    /// ```
    pub fn train(&mut self, x_values: &[f32], y_values: &[f32]) -> Result<(), TrainError> {
        self.len = 0;

        if x_values.len() != y_values.len() {
            return Err(ArgumentError::LengthMismatch.into());
        }

        crate::train(x_values, y_values, x_values.len(), &mut self.segments)?;
        self.len = x_values.len() - 1;

        Ok(())
    }

    /// Returns the interpolated value at `x`, or `None` if `x` is outside
    /// the curve. See [`evaluate`](crate::evaluate).
    pub fn evaluate(&self, x: f32) -> Option<f32> {
        evaluate(x, &self.segments, self.len)
    }

    /// The trained segments, in sample order.
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Returns the smallest and largest `x` covered by the curve, not
    /// counting [`TOLERANCE`](crate::TOLERANCE).
    pub fn x_range(&self) -> Option<(f32, f32)> {
        self.segments().iter().fold(None, |range, segment| {
            let (lower, upper) = range.unwrap_or((segment.lower_x(), segment.upper_x()));
            Some((lower.min(segment.lower_x()), upper.max(segment.upper_x())))
        })
    }

    /// Returns the smallest value that can be returned by
    /// [`evaluate`](Curve::evaluate).
    pub fn min_value(&self) -> Option<f32> {
        self.sample_values().reduce(f32::min)
    }

    /// Returns the largest value that can be returned by
    /// [`evaluate`](Curve::evaluate).
    pub fn max_value(&self) -> Option<f32> {
        self.sample_values().reduce(f32::max)
    }

    // Lines are extremes only at their endpoints, so the samples bound the
    // output.
    fn sample_values(&self) -> impl Iterator<Item = f32> + '_ {
        self.segments()
            .iter()
            .flat_map(|segment| [segment.y1, segment.y2])
    }
}

impl<const CAPACITY: usize> Default for Curve<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}
