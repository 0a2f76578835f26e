//! Piecewise-linear curves for approximating sensor transfer functions
//! from a handful of calibration points, without an allocator.
//!
//! [`train`] turns ordered `(x, y)` samples into [`LineSegment`]s in a
//! buffer you own, and [`evaluate`] looks up `x` against those segments.
//! [`Curve`] bundles both with fixed-capacity storage, and
//! [`CurveSensor`] reads an `embedded-hal` ADC channel through a curve.
//!
//! # Examples
//!
//! ```
//! use sensor_curve::{evaluate, train, LineSegment};
//!
//! // Thermistor resistance (kΩ) -> temperature (°C)
//! let resistance: [f32; 6] = [114.34, 68.915, 42.889, 27.445, 18.01, 12.099];
//! let temperature: [f32; 6] = [-30.0, -20.0, -10.0, 0.0, 10.0, 20.0];
//!
//! let mut curve = [LineSegment::default(); 20];
//! train(&resistance, &temperature, 6, &mut curve).unwrap();
//!
//! let value = evaluate(53.0, &curve, 5).unwrap();
//! assert!(value > -20.0 && value < -10.0);
//!
//! assert_eq!(evaluate(200.0, &curve, 5), None);
//! ```

#![cfg_attr(not(test), no_std)]

mod builder;
mod curve;
mod error;
mod evaluator;
mod fmt;
mod segment;
mod sensor;

pub use builder::train;
pub use curve::Curve;
pub use error::{ArgumentError, TrainError};
pub use evaluator::evaluate;
pub use segment::{LineSegment, TOLERANCE};
pub use sensor::{Config, CurveSensor};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f32>, expected: f32) {
        let actual = actual.unwrap();
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn ascending_scenario() {
        let mut curve = [LineSegment::default(); 2];
        train(&[0.0, 10.0, 20.0], &[0.0, 100.0, 50.0], 3, &mut curve).unwrap();

        assert_eq!((curve[0].slope, curve[0].intercept), (10.0, 0.0));
        assert_eq!((curve[1].slope, curve[1].intercept), (-5.0, 150.0));
        assert_eq!(evaluate(5.0, &curve, 2), Some(50.0));
        assert_eq!(evaluate(15.0, &curve, 2), Some(75.0));
        assert_eq!(evaluate(25.0, &curve, 2), None);
    }

    #[test]
    fn descending_scenario_matches_ascending() {
        let mut ascending = [LineSegment::default(); 2];
        let mut descending = [LineSegment::default(); 2];
        train(&[0.0, 10.0, 20.0], &[0.0, 100.0, 50.0], 3, &mut ascending).unwrap();
        train(&[20.0, 10.0, 0.0], &[50.0, 100.0, 0.0], 3, &mut descending).unwrap();

        for x in [0.0, 2.5, 5.0, 10.0, 15.0, 17.5, 20.0] {
            assert_eq!(evaluate(x, &ascending, 2), evaluate(x, &descending, 2));
        }
        assert_eq!(evaluate(5.0, &descending, 2), Some(50.0));
        assert_eq!(evaluate(15.0, &descending, 2), Some(75.0));
    }

    #[test]
    fn thermistor_table() {
        let temperature: [f32; 21] = [
            -30.0, -25.0, -20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0,
            35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
        ];
        let resistance: [f32; 21] = [
            114.34, 88.381, 68.915, 53.65, 42.889, 34.196, 27.445, 22.165, 18.01, 14.72, 12.099,
            10.0, 8.309, 6.948, 5.824, 4.911, 4.16, 3.539, 3.024, 2.593, 2.233,
        ];

        let mut curve: Curve<20> = Curve::new();
        curve.train(&resistance, &temperature).unwrap();

        assert_eq!(curve.len(), 20);
        assert_eq!(curve.x_range(), Some((2.233, 114.34)));
        assert_eq!(curve.min_value(), Some(-30.0));
        assert_eq!(curve.max_value(), Some(70.0));

        for (r, t) in resistance.iter().zip(temperature) {
            assert_close(curve.evaluate(*r), t);
        }

        // 53.0 kΩ sits just past the -15 °C sample
        let value = curve.evaluate(53.0).unwrap();
        assert!(value > -15.0 && value < -14.5);

        assert_eq!(curve.evaluate(120.0), None);
        assert_eq!(curve.evaluate(2.0), None);
    }
}
