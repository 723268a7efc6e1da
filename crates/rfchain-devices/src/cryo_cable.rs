//! Cryogenic coaxial cables characterized at 300 K and 4 K.
//!
//! The loss at an intermediate physical temperature is interpolated
//! linearly in temperature between the two characterized datasets. Below
//! 4 K (millikelvin stages) the 4 K data is used unchanged, while the noise
//! still follows the physical temperature. Temperatures above 300 K, or not
//! strictly positive, are rejected at construction.

use rfchain_core::{Component, ComponentKind, Error, RangePolicy, Result, Sample, Table};

use crate::attenuator::{check_length, check_temperature};
use crate::cable::lossy_line_noise;
use crate::datasheet::{GHZ, gain_table};

/// Temperature of the cold dataset (K).
pub const COLD_TEMPERATURE_K: f64 = 4.0;
/// Temperature of the warm dataset (K).
pub const WARM_TEMPERATURE_K: f64 = 300.0;

const GRID_10GHZ: &[f64] = &[0.0, 0.5, 1.0, 5.0, 10.0];
const GRID_20GHZ: &[f64] = &[0.0, 0.5, 1.0, 5.0, 10.0, 20.0];

/// Cryogenic cable families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryoCableFamily {
    /// 1.19 mm CuNi semi-rigid coax.
    CuNi119,
    /// 0.86 mm CuNi semi-rigid coax.
    CuNi086,
    /// 0.86 mm stainless steel coax.
    Ss086,
    /// 2.19 mm stainless steel coax.
    Ss219,
    /// 0.86 mm NbTi coax, superconducting when cold.
    NbTi086,
    /// CryoCoax BCB029, 0.034" SS/SS.
    Bcb029,
    /// CryoCoax BCB014, 0.085" SS/SS.
    Bcb014,
    /// CryoCoax BCB024, 0.034" SP CuNi/CuNi.
    Bcb024,
    /// CryoCoax BCB012, 0.034" NbTi/NbTi.
    Bcb012,
}

/// `(frequency in GHz, warm gain dB/m, cold gain dB/m)`.
type CryoDatasheet = (&'static [f64], &'static [f64], &'static [f64]);

impl CryoCableFamily {
    pub const ALL: [CryoCableFamily; 9] = [
        CryoCableFamily::CuNi119,
        CryoCableFamily::CuNi086,
        CryoCableFamily::Ss086,
        CryoCableFamily::Ss219,
        CryoCableFamily::NbTi086,
        CryoCableFamily::Bcb029,
        CryoCableFamily::Bcb014,
        CryoCableFamily::Bcb024,
        CryoCableFamily::Bcb012,
    ];

    /// Registered component type name.
    pub fn type_name(self) -> &'static str {
        match self {
            CryoCableFamily::CuNi119 => "CuNi119Cryo",
            CryoCableFamily::CuNi086 => "CuNi086Cryo",
            CryoCableFamily::Ss086 => "Ss086Cryo",
            CryoCableFamily::Ss219 => "Ss219Cryo",
            CryoCableFamily::NbTi086 => "NbTi086Cryo",
            CryoCableFamily::Bcb029 => "Bcb029Ss034Cryo",
            CryoCableFamily::Bcb014 => "Bcb014Ss085Cryo",
            CryoCableFamily::Bcb024 => "Bcb024Sp034Cryo",
            CryoCableFamily::Bcb012 => "Bcb012NbTi034Cryo",
        }
    }

    /// Look up a family by its registered type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.type_name() == name)
    }

    fn datasheet(self) -> CryoDatasheet {
        match self {
            // 1 MHz point is an extrapolation anchor.
            CryoCableFamily::CuNi119 => (
                &[0.001, 0.5, 1.0, 5.0],
                &[-1.0, -2.1, -3.0, -6.7],
                &[-0.5, -1.0, -1.5, -3.2],
            ),
            CryoCableFamily::CuNi086 => (
                GRID_10GHZ,
                &[0.0, -5.4, -7.7, -17.1, -24.3],
                &[0.0, -4.1, -5.7, -12.8, -18.1],
            ),
            CryoCableFamily::Ss086 => (
                GRID_10GHZ,
                &[0.0, -7.3, -10.3, -23.0, -32.7],
                &[0.0, -4.7, -6.6, -14.8, -20.9],
            ),
            CryoCableFamily::Ss219 => (
                GRID_10GHZ,
                &[0.0, -3.0, -4.2, -9.4, -13.5],
                &[0.0, -1.9, -2.6, -5.9, -8.3],
            ),
            CryoCableFamily::NbTi086 => (
                GRID_10GHZ,
                &[0.0, -6.8, -9.6, -21.6, -30.5],
                &[0.0, -0.5, -0.5, -0.5, -0.5],
            ),
            CryoCableFamily::Bcb029 => (
                GRID_20GHZ,
                &[0.0, -7.3, -10.3, -23.0, -32.7, -46.4],
                &[0.0, -4.7, -6.6, -14.8, -20.9, -29.5],
            ),
            CryoCableFamily::Bcb014 => (
                GRID_20GHZ,
                &[0.0, -3.0, -4.2, -9.4, -13.5, -19.2],
                &[0.0, -1.9, -2.6, -5.9, -8.3, -11.7],
            ),
            CryoCableFamily::Bcb024 => (
                GRID_20GHZ,
                &[0.0, -2.1, -3.0, -6.7, -9.5, -13.4],
                &[0.0, -1.0, -1.5, -3.2, -4.6, -6.5],
            ),
            // Cold loss is specified as "< 0.5 dB/m"; treated as 0.5 dB/m.
            CryoCableFamily::Bcb012 => (
                GRID_20GHZ,
                &[0.0, -6.8, -9.6, -21.6, -30.5, -43.1],
                &[0.0, -0.5, -0.5, -0.5, -0.5, -0.5],
            ),
        }
    }
}

/// A cryogenic cable of a given length at a given physical temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct CryoCable {
    family: CryoCableFamily,
    length_m: f64,
    temperature_k: f64,
    gain: Table,
}

impl CryoCable {
    /// Create a cable at a physical temperature in `(0 K, 300 K]`.
    ///
    /// Loss below 4 K is taken from the 4 K data.
    pub fn new(family: CryoCableFamily, length_m: f64, temperature_k: f64) -> Result<Self> {
        check_length(length_m)?;
        check_temperature(temperature_k)?;
        if temperature_k > WARM_TEMPERATURE_K {
            return Err(Error::invalid_parameter(
                "temperature_k",
                temperature_k,
                format!(
                    "{} is characterized up to {} K",
                    family.type_name(),
                    WARM_TEMPERATURE_K
                ),
            ));
        }

        let (freqs, warm, cold) = family.datasheet();
        let warm = gain_table(freqs, GHZ, warm)?;
        let cold = gain_table(freqs, GHZ, cold)?;
        let loss_temperature_k = temperature_k.max(COLD_TEMPERATURE_K);
        let cold_weight = (WARM_TEMPERATURE_K - loss_temperature_k)
            / (WARM_TEMPERATURE_K - COLD_TEMPERATURE_K);
        if cold_weight > 0.0 && cold_weight < 1.0 {
            log::debug!(
                "{}: interpolating loss at {} K between {} K and {} K data",
                family.type_name(),
                temperature_k,
                COLD_TEMPERATURE_K,
                WARM_TEMPERATURE_K
            );
        }
        let gain = warm.blend(&cold, cold_weight)?.scaled(length_m);

        Ok(Self {
            family,
            length_m,
            temperature_k,
            gain,
        })
    }

    pub fn family(&self) -> CryoCableFamily {
        self.family
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }
}

impl Component for CryoCable {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Passive
    }

    fn gain(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        self.gain.eval(frequency, policy)
    }

    fn noise(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        let gain = self.gain.eval(frequency, policy)?;
        Ok(lossy_line_noise(self.temperature_k, gain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfchain_core::BOLTZMANN;

    #[test]
    fn test_type_names_round_trip() {
        for family in CryoCableFamily::ALL {
            assert_eq!(
                CryoCableFamily::from_type_name(family.type_name()),
                Some(family)
            );
        }
    }

    #[test]
    fn test_characterized_temperatures_use_their_own_data() {
        let cold = CryoCable::new(CryoCableFamily::Ss086, 1.0, 4.0).unwrap();
        let warm = CryoCable::new(CryoCableFamily::Ss086, 1.0, 300.0).unwrap();
        assert_eq!(cold.gain(1e9, RangePolicy::Strict).unwrap().value, -6.6);
        assert_eq!(warm.gain(1e9, RangePolicy::Strict).unwrap().value, -10.3);
    }

    #[test]
    fn test_intermediate_temperature_interpolates() {
        let mid_t = (COLD_TEMPERATURE_K + WARM_TEMPERATURE_K) / 2.0;
        let mid = CryoCable::new(CryoCableFamily::Ss219, 1.0, mid_t).unwrap();
        let g = mid.gain(5e9, RangePolicy::Strict).unwrap().value;
        assert!((g - (-9.4 + -5.9) / 2.0).abs() < 1e-12, "gain {}", g);
    }

    #[test]
    fn test_millikelvin_stages_use_cold_loss() {
        let cold = CryoCable::new(CryoCableFamily::Bcb012, 0.3, COLD_TEMPERATURE_K).unwrap();
        for t in [0.02, 0.3, 1.0, 3.99] {
            let c = CryoCable::new(CryoCableFamily::Bcb012, 0.3, t).unwrap();
            assert_eq!(c.temperature_k(), t);
            assert_eq!(
                c.gain(2e9, RangePolicy::Strict).unwrap().value,
                cold.gain(2e9, RangePolicy::Strict).unwrap().value
            );
            let n = c.noise(2e9, RangePolicy::Strict).unwrap().value;
            let g = c.gain(2e9, RangePolicy::Strict).unwrap().value;
            let expected = BOLTZMANN * t * (1.0 - 10f64.powf(g / 10.0));
            assert!((n / expected - 1.0).abs() < 1e-12, "{} K: {}", t, n);
        }
    }

    #[test]
    fn test_uncharacterized_temperatures_rejected() {
        for t in [-1.0, 300.5, 400.0, f64::NAN] {
            assert!(
                matches!(
                    CryoCable::new(CryoCableFamily::CuNi086, 1.0, t),
                    Err(Error::InvalidParameter { .. })
                ),
                "{} K should be rejected",
                t
            );
        }
        assert!(CryoCable::new(CryoCableFamily::CuNi086, 1.0, 0.0).is_err());
        assert!(CryoCable::new(CryoCableFamily::CuNi086, -0.5, 4.0).is_err());
    }

    #[test]
    fn test_superconducting_cable_is_nearly_lossless_cold() {
        let nbti = CryoCable::new(CryoCableFamily::Bcb012, 2.0, 4.0).unwrap();
        let g = nbti.gain(10e9, RangePolicy::Strict).unwrap().value;
        assert!((g + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cold_noise_is_small() {
        let c = CryoCable::new(CryoCableFamily::CuNi086, 0.5, 4.0).unwrap();
        let n = c.noise(1.5e9, RangePolicy::Strict).unwrap().value;
        assert!(n > 0.0);
        assert!(n < BOLTZMANN * 4.0);
    }

    #[test]
    fn test_clamps_above_datasheet() {
        let c = CryoCable::new(CryoCableFamily::CuNi119, 1.0, 4.0).unwrap();
        let s = c.gain(8e9, RangePolicy::Clamp).unwrap();
        assert!(s.clamped);
        assert_eq!(s.value, -3.2);
        // 0 Hz sits below the 1 MHz anchor for this family.
        assert!(c.gain(0.0, RangePolicy::Clamp).unwrap().clamped);
    }
}
