//! Frequency characterization tables and interpolation.
//!
//! A [`Table`] holds datasheet or measured samples `(frequency, value)` with
//! strictly increasing frequencies. The interpolation scheme is fixed by the
//! kind of quantity the table describes:
//!
//! | Table kind | Constructor      | Frequency axis | Value axis |
//! |------------|------------------|----------------|------------|
//! | gain (dB)  | [`Table::gain`]  | logarithmic    | linear     |
//! | noise PSD  | [`Table::noise`] | logarithmic    | logarithmic|
//!
//! Two fallbacks keep the scheme total: a segment whose lower edge sits at
//! 0 Hz is interpolated linearly in frequency (`ln 0` is undefined), and a
//! segment with a non-positive endpoint value is interpolated linearly in
//! value.
//!
//! Queries outside `[first, last]` follow a [`RangePolicy`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do with a query outside a table's characterized frequency range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Use the nearest boundary sample and flag the result as clamped.
    #[default]
    Clamp,
    /// Fail with [`Error::FrequencyOutOfRange`].
    Strict,
}

/// Interpolation scheme between neighbouring samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Linear in frequency, linear in value.
    Linear,
    /// Logarithmic in frequency, linear in value.
    LogFrequency,
    /// Logarithmic in frequency and in value.
    LogLog,
}

/// A single evaluated quantity with its audit flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The evaluated value (dB or W/Hz depending on the query).
    pub value: f64,
    /// True if any table involved was queried outside its characterized range.
    pub clamped: bool,
}

impl Sample {
    /// A sample computed inside every characterized range.
    pub const fn exact(value: f64) -> Self {
        Self {
            value,
            clamped: false,
        }
    }

    /// A sample that relied on boundary clamping.
    pub const fn clamped(value: f64) -> Self {
        Self {
            value,
            clamped: true,
        }
    }

    /// Transform the value, keeping the clamp flag.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self {
            value: f(self.value),
            clamped: self.clamped,
        }
    }

    /// Combine two samples, carrying the clamp flag of either.
    pub fn zip_with(self, other: Sample, f: impl FnOnce(f64, f64) -> f64) -> Self {
        Self {
            value: f(self.value, other.value),
            clamped: self.clamped || other.clamped,
        }
    }
}

/// Reject negative, NaN and infinite frequencies.
pub fn check_frequency(frequency: f64) -> Result<()> {
    if frequency.is_finite() && frequency >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidFrequency(frequency))
    }
}

/// An ordered set of `(frequency, value)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    frequencies: Vec<f64>,
    values: Vec<f64>,
    interpolation: Interpolation,
}

impl Table {
    /// Build a table, validating that frequencies are finite, non-negative
    /// and strictly increasing and that every value is finite.
    pub fn new(
        frequencies: Vec<f64>,
        values: Vec<f64>,
        interpolation: Interpolation,
    ) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(Error::InvalidTable("table has no samples".into()));
        }
        if frequencies.len() != values.len() {
            return Err(Error::InvalidTable(format!(
                "{} frequencies but {} values",
                frequencies.len(),
                values.len()
            )));
        }
        if let Some(f) = frequencies.iter().find(|f| !f.is_finite() || **f < 0.0) {
            return Err(Error::InvalidTable(format!("invalid sample frequency {}", f)));
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidTable(format!("non-finite sample value {}", v)));
        }
        if let Some(w) = frequencies.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::InvalidTable(format!(
                "frequencies not strictly increasing at {} -> {}",
                w[0], w[1]
            )));
        }

        Ok(Self {
            frequencies,
            values,
            interpolation,
        })
    }

    /// A gain/attenuation table in dB (log-frequency, linear-value).
    pub fn gain(frequencies: &[f64], gain_db: &[f64]) -> Result<Self> {
        Self::new(
            frequencies.to_vec(),
            gain_db.to_vec(),
            Interpolation::LogFrequency,
        )
    }

    /// A noise PSD table in W/Hz (log-frequency, log-value).
    pub fn noise(frequencies: &[f64], psd: &[f64]) -> Result<Self> {
        Self::new(frequencies.to_vec(), psd.to_vec(), Interpolation::LogLog)
    }

    /// Copy of this table with every value multiplied by `factor`.
    ///
    /// Used to turn per-metre datasheet loss into the loss of a given length.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            frequencies: self.frequencies.clone(),
            values: self.values.iter().map(|v| v * factor).collect(),
            interpolation: self.interpolation,
        }
    }

    /// Copy of this table with each value replaced by a blend of this table
    /// and `other` sampled at the same frequencies: `(1 − w)·self + w·other`.
    ///
    /// Both tables must share the same frequency grid.
    pub fn blend(&self, other: &Table, weight: f64) -> Result<Self> {
        if self.frequencies != other.frequencies {
            return Err(Error::InvalidTable(
                "cannot blend tables with different frequency grids".into(),
            ));
        }
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * (1.0 - weight) + b * weight)
            .collect();
        Ok(Self {
            frequencies: self.frequencies.clone(),
            values,
            interpolation: self.interpolation,
        })
    }

    /// Characterized range `(first, last)` in Hz.
    pub fn domain(&self) -> (f64, f64) {
        (
            self.frequencies[0],
            self.frequencies[self.frequencies.len() - 1],
        )
    }

    /// Sample frequencies in Hz.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Sample values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Interpolation scheme.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Evaluate the table at `frequency`.
    pub fn eval(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        check_frequency(frequency)?;

        let (min, max) = self.domain();
        if frequency < min || frequency > max {
            return match policy {
                RangePolicy::Strict => Err(Error::FrequencyOutOfRange { frequency, min, max }),
                RangePolicy::Clamp => {
                    let edge = if frequency < min {
                        self.values[0]
                    } else {
                        self.values[self.values.len() - 1]
                    };
                    Ok(Sample::clamped(edge))
                }
            };
        }

        // First sample at or above the query; exact knots return the stored value.
        let idx = self.frequencies.partition_point(|&f| f < frequency);
        if self.frequencies[idx] == frequency {
            return Ok(Sample::exact(self.values[idx]));
        }

        let (f0, f1) = (self.frequencies[idx - 1], self.frequencies[idx]);
        let (v0, v1) = (self.values[idx - 1], self.values[idx]);
        let t = self.position(frequency, f0, f1);
        Ok(Sample::exact(self.blend_values(v0, v1, t)))
    }

    fn position(&self, f: f64, f0: f64, f1: f64) -> f64 {
        match self.interpolation {
            Interpolation::LogFrequency | Interpolation::LogLog if f0 > 0.0 => {
                (f / f0).ln() / (f1 / f0).ln()
            }
            _ => (f - f0) / (f1 - f0),
        }
    }

    fn blend_values(&self, v0: f64, v1: f64, t: f64) -> f64 {
        match self.interpolation {
            Interpolation::LogLog if v0 > 0.0 && v1 > 0.0 => {
                (v0.ln() * (1.0 - t) + v1.ln() * t).exp()
            }
            _ => v0 * (1.0 - t) + v1 * t,
        }
    }
}
