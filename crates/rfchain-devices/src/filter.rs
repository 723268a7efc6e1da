//! Mini-Circuits VHF high-pass filters.
//!
//! Filters are treated as noiseless: only their insertion loss is modeled.

use rfchain_core::{Component, ComponentKind, RangePolicy, Result, Sample, Table};

use crate::datasheet::{MHZ, gain_table};

/// Available high-pass filter parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterModel {
    /// VHF-1320+, 1320 MHz passband edge.
    Vhf1320,
    /// VHF-1760+, 1760 MHz passband edge.
    Vhf1760,
    /// VHF-1910+, 1910 MHz passband edge.
    Vhf1910,
}

impl FilterModel {
    pub const ALL: [FilterModel; 3] = [
        FilterModel::Vhf1320,
        FilterModel::Vhf1760,
        FilterModel::Vhf1910,
    ];

    /// Registered component type name.
    pub fn type_name(self) -> &'static str {
        match self {
            FilterModel::Vhf1320 => "Vhf1320Filter",
            FilterModel::Vhf1760 => "Vhf1760Filter",
            FilterModel::Vhf1910 => "Vhf1910Filter",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.type_name() == name)
    }

    /// `(frequency in MHz, gain in dB)`.
    fn datasheet(self) -> (&'static [f64], &'static [f64]) {
        match self {
            FilterModel::Vhf1320 => (
                &[1.0, 100.0, 880.0, 1060.0, 1180.0, 1260.0, 1320.0, 1400.0, 1700.0, 3700.0],
                &[-94.0, -69.0, -51.0, -27.0, -14.0, -6.3, -2.9, -1.6, -0.8, -0.5],
            ),
            FilterModel::Vhf1760 => (
                &[
                    1.0, 100.0, 950.0, 1230.0, 1400.0, 1550.0, 1700.0, 1760.0, 1900.0, 2100.0,
                    2200.0, 4500.0,
                ],
                &[
                    -94.0, -65.0, -47.0, -24.0, -13.0, -6.0, -2.6, -1.9, -1.2, -0.8, -0.7, -0.5,
                ],
            ),
            FilterModel::Vhf1910 => (
                &[
                    1.0, 100.0, 1075.0, 1400.0, 1630.0, 1750.0, 1850.0, 1910.0, 2000.0, 2100.0,
                    2200.0, 4400.0,
                ],
                &[
                    -91.0, -76.0, -42.0, -26.0, -13.0, -7.0, -3.4, -2.2, -1.4, -1.1, -1.0, -0.8,
                ],
            ),
        }
    }
}

/// A high-pass filter with tabulated insertion loss.
#[derive(Debug, Clone, PartialEq)]
pub struct HighPassFilter {
    model: FilterModel,
    gain: Table,
}

impl HighPassFilter {
    pub fn new(model: FilterModel) -> Result<Self> {
        let (freqs, gain) = model.datasheet();
        Ok(Self {
            model,
            gain: gain_table(freqs, MHZ, gain)?,
        })
    }

    pub fn model(&self) -> FilterModel {
        self.model
    }
}

impl Component for HighPassFilter {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Passive
    }

    fn gain(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        self.gain.eval(frequency, policy)
    }

    fn noise(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        // Same range handling as gain, zero PSD.
        Ok(self.gain.eval(frequency, policy)?.map(|_| 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passband_and_stopband() {
        let f = HighPassFilter::new(FilterModel::Vhf1320).unwrap();
        let pass = f.gain(2e9, RangePolicy::Strict).unwrap().value;
        let stop = f.gain(500e6, RangePolicy::Strict).unwrap().value;
        assert!(pass > -1.0 && pass < 0.0);
        assert!(stop < -50.0);
        assert_eq!(f.gain(1.32e9, RangePolicy::Strict).unwrap().value, -2.9);
    }

    #[test]
    fn test_filters_are_noiseless() {
        for model in FilterModel::ALL {
            let f = HighPassFilter::new(model).unwrap();
            assert_eq!(f.noise(1.5e9, RangePolicy::Strict).unwrap().value, 0.0);
            assert_eq!(f.kind(), ComponentKind::Passive);
        }
    }

    #[test]
    fn test_below_first_sample() {
        let f = HighPassFilter::new(FilterModel::Vhf1910).unwrap();
        assert!(f.gain(0.0, RangePolicy::Strict).is_err());
        let s = f.gain(0.0, RangePolicy::Clamp).unwrap();
        assert!(s.clamped);
        assert_eq!(s.value, -91.0);
        assert!(f.noise(0.0, RangePolicy::Clamp).unwrap().clamped);
    }
}
