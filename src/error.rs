use core::fmt;

/// Why [`train`](crate::train) rejected its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// `x_values` or `y_values` holds fewer than `count` samples.
    MissingSamples,
    /// `x_values` and `y_values` have different lengths.
    LengthMismatch,
    /// The output buffer cannot hold `count - 1` segments.
    CapacityExceeded,
    /// A sample is NaN or infinite.
    NonFinite,
}

/// Errors returned when training a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrainError {
    InvalidArgument(ArgumentError),
    /// Fewer than two samples were provided.
    InsufficientData,
    /// `x_values[index]` and `x_values[index + 1]` are closer than
    /// [`TOLERANCE`](crate::TOLERANCE).
    DegenerateSegment { index: usize },
}

impl From<ArgumentError> for TrainError {
    fn from(error: ArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgumentError::MissingSamples => write!(f, "fewer samples than requested"),
            ArgumentError::LengthMismatch => write!(f, "x and y sample counts differ"),
            ArgumentError::CapacityExceeded => write!(f, "segment buffer is too small"),
            ArgumentError::NonFinite => write!(f, "sample is not a finite number"),
        }
    }
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrainError::InvalidArgument(error) => write!(f, "invalid argument: {}", error),
            TrainError::InsufficientData => write!(f, "at least two samples are required"),
            TrainError::DegenerateSegment { index } => write!(
                f,
                "x values at {} and {} are too close together",
                index,
                index + 1
            ),
        }
    }
}
