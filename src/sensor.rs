use crate::curve::Curve;
use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};

/// Scaling from raw ADC readings to millivolts.
///
/// - `max_voltage`: The voltage corresponding to the largest value possible for the ADC (mV)
/// - `precision`: The precision of the ADC in bits (eg. for 10-bit precision, use `10`).
///   Values of 64 or more scale every reading to 0 mV.
///
/// # Examples
///
/// ```
/// use sensor_curve::Config;
///
/// let config = Config {
///     max_voltage: 3300, // 3.3 V
///     precision: 10,     // 10 bits of precision
/// };
///
/// assert_eq!(config.millivolts(512), 1650.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub max_voltage: u32,
    pub precision: u32,
}

impl Config {
    /// Converts a raw ADC reading to millivolts.
    pub fn millivolts(&self, adc_value: u32) -> f32 {
        let max_adc_value = 1u64
            .checked_shl(self.precision)
            .map_or(f32::INFINITY, |value| value as f32);
        adc_value as f32 * self.max_voltage as f32 / max_adc_value
    }
}

/// Reads an ADC channel and maps the voltage through a [`Curve`].
///
/// The curve's `x` values are millivolts, as produced by
/// [`Config::millivolts`].
#[derive(Debug)]
pub struct CurveSensor<Pin, Word, const CAPACITY: usize> {
    pin: Pin,
    config: Config,
    curve: Curve<CAPACITY>,
    word: PhantomData<Word>,
}

type Error<Adc, ADC, Word, Pin> = nb::Error<<Adc as OneShot<ADC, Word, Pin>>::Error>;

impl<Pin, Word, const CAPACITY: usize> CurveSensor<Pin, Word, CAPACITY> {
    /// Returns a sensor reading `pin` and evaluating against `curve`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_curve::{Config, Curve, CurveSensor};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     max_voltage: 1000,
    ///     precision: 12,
    /// };
    /// let curve: Curve<2> = Curve::from_points(&[
    ///     (100.0, 40.0),
    ///     (200.0, 30.0),
    ///     (300.0, 10.0),
    /// ])
    /// .unwrap();
    ///
    /// let sensor = CurveSensor::new(pin, config, curve);
    /// # let sensor_u16: CurveSensor<MockChan0, u16, 2> = sensor;
    /// ```
    pub fn new<ADC>(pin: Pin, config: Config, curve: Curve<CAPACITY>) -> Self
    where
        Pin: Channel<ADC>,
    {
        Self {
            pin,
            config,
            curve,
            word: PhantomData,
        }
    }

    /// Destroys the sensor and returns the `Pin` and the curve.
    pub fn free(self) -> (Pin, Curve<CAPACITY>) {
        (self.pin, self.curve)
    }

    pub fn curve(&self) -> &Curve<CAPACITY> {
        &self.curve
    }

    /// Replaces the curve, eg. after recalibration.
    pub fn set_curve(&mut self, curve: Curve<CAPACITY>) {
        self.curve = curve;
    }

    /// Reads the ADC and returns the curve's value at the measured
    /// voltage. If the voltage falls outside the curve, returns
    /// `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_curve::{Config, Curve, CurveSensor};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 600)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     max_voltage: 4096,
    ///     precision: 12,
    /// };
    /// let curve: Curve<2> = Curve::from_points(&[
    ///     (500.0, 40.0),
    ///     (700.0, 30.0),
    ///     (900.0, 10.0),
    /// ])
    /// .unwrap();
    ///
    /// let mut sensor = CurveSensor::new(pin, config, curve);
    ///
    /// // With voltage at 600 mV, the value is 35
    /// assert_eq!(sensor.read(&mut adc), Ok(Some(35.0)));
    /// ```
    pub fn read<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<Option<f32>, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let adc_value = adc.read(&mut self.pin)?;
        let voltage = self.config.millivolts(adc_value.into());

        Ok(self.curve.evaluate(voltage))
    }
}
