//! AD9082 data converter, ADC side.
//!
//! The converter is the last stage of a receive chain. It has unity gain and
//! a noise floor derived from the datasheet SNR at full scale spread over the
//! Nyquist bandwidth.

use rfchain_core::{
    Component, ComponentKind, RangePolicy, Result, Sample, Table, check_frequency,
    units::dbm_to_watts,
};

use crate::datasheet::{GHZ, noise_table};

/// Full-scale input power (dBm).
pub const ADC_FULL_SCALE_DBM: f64 = 1.0;
/// Nyquist bandwidth the SNR is specified over (Hz).
pub const ADC_NYQUIST_BANDWIDTH_HZ: f64 = 3e9;
/// Flat noise density used when no frequency dependence is wanted (dBm/Hz).
pub const ADC_NOMINAL_NOISE_DENSITY_DBM_PER_HZ: f64 = -140.0;

const SNR_FREQUENCIES_GHZ: [f64; 6] = [0.001, 1.0, 1.5, 2.0, 2.5, 3.0];
const SNR_DBFS: [f64; 6] = [56.0, 55.5, 55.0, 54.5, 52.0, 51.5];

/// AD9082 ADC input.
#[derive(Debug, Clone, PartialEq)]
pub struct Ad9082Adc {
    noise: Table,
}

impl Ad9082Adc {
    pub fn new() -> Result<Self> {
        let psd = SNR_DBFS.map(|snr| {
            dbm_to_watts(ADC_FULL_SCALE_DBM - snr) / ADC_NYQUIST_BANDWIDTH_HZ
        });
        Ok(Self {
            noise: noise_table(&SNR_FREQUENCIES_GHZ, GHZ, &psd)?,
        })
    }

    /// Frequency-independent noise density in W/Hz.
    pub fn nominal_noise_density() -> f64 {
        dbm_to_watts(ADC_NOMINAL_NOISE_DENSITY_DBM_PER_HZ)
    }
}

impl Component for Ad9082Adc {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Active
    }

    fn gain(&self, frequency: f64, _policy: RangePolicy) -> Result<Sample> {
        check_frequency(frequency)?;
        Ok(Sample::exact(0.0))
    }

    fn noise(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        self.noise.eval(frequency, policy)
    }
}
