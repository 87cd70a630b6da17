use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ADC_MAX_12BIT, DEFAULT_CHIP_SELECT, DEFAULT_INTERVAL_US, DEFAULT_VREF, MAX_INTERVAL_US,
    MICROS_PER_MILLI, MICROS_PER_SEC, MIN_INTERVAL_US,
};

/// Error type for logger configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Sampling period outside the supported window.
    #[error("Sampling interval {0} us out of range ({MIN_INTERVAL_US}-{MAX_INTERVAL_US} us)")]
    IntervalOutOfRange(u64),

    /// Interval input is not a decimal microsecond count.
    #[error("Invalid interval input: {0}")]
    InvalidFormat(String),

    /// ADC scale factor must be finite and strictly positive.
    #[error("Invalid ADC scale factor: {0}")]
    InvalidScale(f32),
}

/// The sampling period, held once in microseconds. The seconds and
/// milliseconds views the rig needs elsewhere are derived, so the three
/// copies can never disagree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub struct SampleInterval(u64);

impl SampleInterval {
    /// Creates a new interval from a microsecond count.
    ///
    /// # Errors
    /// Returns `ConfigError::IntervalOutOfRange` outside
    /// `MIN_INTERVAL_US..=MAX_INTERVAL_US` (1 ms to 1 hour).
    pub fn new(micros: u64) -> Result<Self, ConfigError> {
        if !(MIN_INTERVAL_US..=MAX_INTERVAL_US).contains(&micros) {
            return Err(ConfigError::IntervalOutOfRange(micros));
        }
        Ok(Self(micros))
    }

    /// Creates an interval from whole milliseconds.
    ///
    /// # Errors
    /// Returns `ConfigError::IntervalOutOfRange` if the period does not fit
    /// the supported window.
    pub fn from_millis(millis: u64) -> Result<Self, ConfigError> {
        Self::new(millis.saturating_mul(MICROS_PER_MILLI))
    }

    /// Creates an interval from whole seconds.
    ///
    /// # Errors
    /// Returns `ConfigError::IntervalOutOfRange` if the period does not fit
    /// the supported window.
    pub fn from_secs(secs: u64) -> Result<Self, ConfigError> {
        Self::new(secs.saturating_mul(MICROS_PER_SEC))
    }

    /// Returns the period in microseconds
    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Returns the period in whole milliseconds (truncating)
    #[inline]
    pub const fn as_millis(self) -> u64 {
        self.0 / MICROS_PER_MILLI
    }

    /// Returns the period in whole seconds (truncating)
    #[inline]
    pub const fn as_secs(self) -> u64 {
        self.0 / MICROS_PER_SEC
    }
}

impl Default for SampleInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_US)
    }
}

impl TryFrom<u64> for SampleInterval {
    type Error = ConfigError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SampleInterval> for u64 {
    fn from(interval: SampleInterval) -> Self {
        interval.0
    }
}

impl std::fmt::Display for SampleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SampleInterval {
    type Err = ConfigError;

    /// Parses an operator-typed decimal microsecond count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let micros = trimmed
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidFormat(trimmed.to_owned()))?;
        Self::new(micros)
    }
}

/// Volts-per-count factor applied to raw ADC readings.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct AdcScale(f32);

impl AdcScale {
    /// Creates a new scale factor.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidScale` unless the factor is finite and
    /// strictly positive.
    pub fn new(volts_per_count: f32) -> Result<Self, ConfigError> {
        if !volts_per_count.is_finite() || volts_per_count <= 0.0 {
            return Err(ConfigError::InvalidScale(volts_per_count));
        }
        Ok(Self(volts_per_count))
    }

    /// Scale for a 12-bit converter referenced to `vref` volts.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidScale` for a non-positive or non-finite
    /// reference.
    pub fn twelve_bit(vref: f32) -> Result<Self, ConfigError> {
        Self::new(vref / f32::from(ADC_MAX_12BIT))
    }

    /// Returns the factor as f32
    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Converts a raw ADC count to volts
    #[inline]
    pub fn to_volts(self, raw: u16) -> f32 {
        f32::from(raw) * self.0
    }
}

impl Default for AdcScale {
    fn default() -> Self {
        Self(DEFAULT_VREF / f32::from(ADC_MAX_12BIT))
    }
}

impl TryFrom<f32> for AdcScale {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AdcScale> for f32 {
    fn from(scale: AdcScale) -> Self {
        scale.0
    }
}

/// Run configuration for a capture session. Built once at startup from
/// operator input or a config file and passed to the components that need
/// it; nothing in the crate reads ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    interval: SampleInterval,
    adc_scale: AdcScale,
    chip_select: u8,
}

impl CaptureConfig {
    /// Assembles a configuration from already-validated parts.
    pub const fn new(interval: SampleInterval, adc_scale: AdcScale, chip_select: u8) -> Self {
        Self {
            interval,
            adc_scale,
            chip_select,
        }
    }

    /// Returns the sampling period
    pub const fn interval(&self) -> SampleInterval {
        self.interval
    }

    /// Returns the ADC scale factor
    pub const fn adc_scale(&self) -> AdcScale {
        self.adc_scale
    }

    /// Returns the SD chip-select pin
    pub const fn chip_select(&self) -> u8 {
        self.chip_select
    }

    /// Converts a raw ADC count to volts using the configured scale
    pub fn adc_volts(&self, raw: u16) -> f32 {
        self.adc_scale.to_volts(raw)
    }
}

impl Default for CaptureConfig {
    /// The lab rig: 1 s period, 12-bit ADC at 3.3 V, chip select on pin 4.
    fn default() -> Self {
        Self {
            interval: SampleInterval::default(),
            adc_scale: AdcScale::default(),
            chip_select: DEFAULT_CHIP_SELECT,
        }
    }
}
