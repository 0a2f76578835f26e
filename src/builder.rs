use crate::error::{ArgumentError, TrainError};
use crate::fmt::{debug, warning};
use crate::segment::LineSegment;

/// Builds a curve from `count` samples, writing `count - 1` segments into
/// the start of `buffer`.
///
/// Segment `i` joins `(x_values[i], y_values[i])` to
/// `(x_values[i + 1], y_values[i + 1])`. Samples are never reordered, so
/// the `x` values may ascend, descend, or change direction, as long as no
/// two consecutive values are within [`TOLERANCE`](crate::TOLERANCE) of
/// each other.
///
/// Every argument is validated before anything is written, so on error
/// `buffer` is left as it was. Segments past `count - 1` are never
/// touched.
///
/// # Errors
///
/// - [`InsufficientData`](TrainError::InsufficientData) if `count < 2`
/// - [`InvalidArgument`](TrainError::InvalidArgument) if either sample
///   slice is shorter than `count`, `buffer` cannot hold `count - 1`
///   segments, or a sample, slope, or intercept is not finite
/// - [`DegenerateSegment`](TrainError::DegenerateSegment) if two
///   consecutive `x` values are too close together
///
/// # Examples
///
/// ```
/// use sensor_curve::{train, LineSegment};
///
/// let mut buffer = [LineSegment::default(); 4];
/// train(&[0.0, 10.0, 20.0], &[0.0, 100.0, 50.0], 3, &mut buffer).unwrap();
///
/// assert_eq!(buffer[0].slope, 10.0);
/// assert_eq!(buffer[1].slope, -5.0);
/// assert_eq!(buffer[1].intercept, 150.0);
/// ```
pub fn train(
    x_values: &[f32],
    y_values: &[f32],
    count: usize,
    buffer: &mut [LineSegment],
) -> Result<(), TrainError> {
    if count >= 2 && (x_values.len() < count || y_values.len() < count) {
        let error = TrainError::from(ArgumentError::MissingSamples);
        warning!("rejected calibration table: {}", error);
        return Err(error);
    }

    build(count, |index| (x_values[index], y_values[index]), buffer)
}

/// Validates the first `count` samples returned by `sample`, then writes
/// one segment per consecutive pair into `buffer`.
pub(crate) fn build<F>(count: usize, sample: F, buffer: &mut [LineSegment]) -> Result<(), TrainError>
where
    F: Fn(usize) -> (f32, f32),
{
    validate(count, &sample, buffer.len()).map_err(|error| {
        warning!("rejected calibration table: {}", error);
        error
    })?;

    for (index, segment) in buffer[..count - 1].iter_mut().enumerate() {
        let (x1, y1) = sample(index);
        let (x2, y2) = sample(index + 1);
        *segment = LineSegment::checked(x1, y1, x2, y2).map_err(|rejection| rejection.at(index))?;
    }

    debug!("trained curve with {} segments", count - 1);

    Ok(())
}

fn validate<F>(count: usize, sample: &F, capacity: usize) -> Result<(), TrainError>
where
    F: Fn(usize) -> (f32, f32),
{
    if count < 2 {
        return Err(TrainError::InsufficientData);
    }

    if capacity < count - 1 {
        return Err(ArgumentError::CapacityExceeded.into());
    }

    if !(0..count)
        .map(sample)
        .all(|(x, y)| x.is_finite() && y.is_finite())
    {
        return Err(ArgumentError::NonFinite.into());
    }

    (0..count - 1).try_for_each(|index| {
        let (x1, y1) = sample(index);
        let (x2, y2) = sample(index + 1);
        LineSegment::checked(x1, y1, x2, y2)
            .map(|_| ())
            .map_err(|rejection| rejection.at(index))
    })
}
