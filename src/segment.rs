use crate::error::{ArgumentError, TrainError};

/// Distance below which two `x` values are treated as equal.
///
/// Used both when rejecting degenerate segments during training and when
/// widening segment bounds during evaluation.
pub const TOLERANCE: f32 = 1e-6;

/// A straight line between two consecutive samples.
///
/// The endpoints are kept in the order they were supplied, so `x1` may be
/// greater than `x2` for a descending table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub slope: f32,
    pub intercept: f32,
}

impl LineSegment {
    /// Returns the segment through `(x1, y1)` and `(x2, y2)`, or `None` if
    /// the two `x` values are within [`TOLERANCE`](TOLERANCE) of each other
    /// or the line's slope or intercept does not fit in an `f32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_curve::LineSegment;
    ///
    /// let segment = LineSegment::through(10.0, 100.0, 20.0, 50.0).unwrap();
    /// assert_eq!(segment.slope, -5.0);
    /// assert_eq!(segment.intercept, 150.0);
    ///
    /// assert!(LineSegment::through(3.0, 1.0, 3.0, 2.0).is_none());
    /// ```
    pub fn through(x1: f32, y1: f32, x2: f32, y2: f32) -> Option<Self> {
        Self::checked(x1, y1, x2, y2).ok()
    }

    pub(crate) fn checked(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, Rejection> {
        if is_degenerate(x1, x2) {
            return Err(Rejection::Degenerate);
        }

        let slope = (y2 - y1) / (x2 - x1);
        let intercept = y1 - slope * x1;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(Rejection::Overflow);
        }

        Ok(Self {
            x1,
            y1,
            x2,
            y2,
            slope,
            intercept,
        })
    }

    /// The smaller of the two endpoint `x` values.
    pub fn lower_x(&self) -> f32 {
        self.x1.min(self.x2)
    }

    /// The larger of the two endpoint `x` values.
    pub fn upper_x(&self) -> f32 {
        self.x1.max(self.x2)
    }

    /// Whether `x` lies between the endpoints, widened by
    /// [`TOLERANCE`](TOLERANCE) on both sides. The direction of the slope
    /// does not matter.
    pub fn contains(&self, x: f32) -> bool {
        x >= self.lower_x() - TOLERANCE && x <= self.upper_x() + TOLERANCE
    }

    /// Value of the line at `x`. Does not check that `x` is within the
    /// segment.
    pub fn value_at(&self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }
}

/// Why two samples cannot form a [`LineSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The `x` values are within [`TOLERANCE`](TOLERANCE).
    Degenerate,
    /// The slope or intercept is infinite or NaN.
    Overflow,
}

impl Rejection {
    pub(crate) fn at(self, index: usize) -> TrainError {
        match self {
            Rejection::Degenerate => TrainError::DegenerateSegment { index },
            Rejection::Overflow => ArgumentError::NonFinite.into(),
        }
    }
}

fn is_degenerate(a: f32, b: f32) -> bool {
    let distance = if a > b { a - b } else { b - a };
    distance < TOLERANCE
}
