//! Fixed attenuator with analytic thermal noise.

use rfchain_core::{
    Component, ComponentKind, Error, RangePolicy, Result, Sample, check_frequency,
    units::thermal_noise_psd,
};

/// A matched attenuator at a physical temperature.
///
/// The loss is a flat configured value and the output noise is `k_B·T`,
/// independent of frequency. No characterization table is involved, so the
/// range policy never applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Attenuator {
    attenuation_db: f64,
    temperature_k: f64,
}

impl Attenuator {
    /// Create an attenuator.
    ///
    /// `attenuation_db` is expressed as a gain, so a 10 dB pad is `-10.0`.
    pub fn new(attenuation_db: f64, temperature_k: f64) -> Result<Self> {
        if !attenuation_db.is_finite() || attenuation_db > 0.0 {
            return Err(Error::invalid_parameter(
                "attenuation_db",
                attenuation_db,
                "attenuation is a non-positive gain in dB",
            ));
        }
        check_temperature(temperature_k)?;
        Ok(Self {
            attenuation_db,
            temperature_k,
        })
    }

    /// Configured gain in dB (non-positive).
    pub fn attenuation_db(&self) -> f64 {
        self.attenuation_db
    }

    /// Physical temperature in K.
    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }
}

impl Component for Attenuator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Passive
    }

    fn gain(&self, frequency: f64, _policy: RangePolicy) -> Result<Sample> {
        check_frequency(frequency)?;
        Ok(Sample::exact(self.attenuation_db))
    }

    fn noise(&self, frequency: f64, _policy: RangePolicy) -> Result<Sample> {
        check_frequency(frequency)?;
        Ok(Sample::exact(thermal_noise_psd(self.temperature_k)))
    }
}

/// Reject non-positive or non-finite absolute temperatures.
pub(crate) fn check_temperature(temperature_k: f64) -> Result<()> {
    if temperature_k.is_finite() && temperature_k > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            "temperature_k",
            temperature_k,
            "absolute temperature must be positive",
        ))
    }
}

/// Reject negative or non-finite lengths.
pub(crate) fn check_length(length_m: f64) -> Result<()> {
    if length_m.is_finite() && length_m >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            "length_m",
            length_m,
            "length must be non-negative",
        ))
    }
}
