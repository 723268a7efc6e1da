//! Room-temperature coaxial cables.
//!
//! Each family is characterized by insertion loss per metre at room
//! temperature; the loss of a cable is the per-metre table scaled by length.
//! A lossy line at physical temperature `T` with linear gain `G` emits
//! `k_B·T·(1 − G)` at its output.

use rfchain_core::{
    Component, ComponentKind, RangePolicy, Result, Sample, Table,
    units::{db_to_linear, thermal_noise_psd},
};

use crate::attenuator::check_length;
use crate::datasheet::{GHZ, gain_table};

/// Physical temperature assumed for room-temperature cable families (K).
pub const ROOM_TEMPERATURE_K: f64 = 300.0;

/// Room-temperature cable families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CableFamily {
    /// Typical L-com SMA coax (e.g. LCCA30166), VNA-measured.
    LcomSma,
    /// Fairview Microwave FM-F141 SMA coax (e.g. FMCA2155).
    FairviewF141,
    /// Pasternack RG58C/U flexible coax.
    Rg58c,
    /// Pasternack RG174A/U flexible coax.
    Rg174a,
}

impl CableFamily {
    pub const ALL: [CableFamily; 4] = [
        CableFamily::LcomSma,
        CableFamily::FairviewF141,
        CableFamily::Rg58c,
        CableFamily::Rg174a,
    ];

    /// Registered component type name.
    pub fn type_name(self) -> &'static str {
        match self {
            CableFamily::LcomSma => "LcomSmaCable",
            CableFamily::FairviewF141 => "FairviewF141Cable",
            CableFamily::Rg58c => "Rg58cCable",
            CableFamily::Rg174a => "Rg174aCable",
        }
    }

    /// Look up a family by its registered type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.type_name() == name)
    }

    /// `(frequency in GHz, gain in dB per metre)`.
    fn datasheet(self) -> (&'static [f64], &'static [f64]) {
        match self {
            // Measured on a 10 ft assembly, scaled to per-metre loss.
            CableFamily::LcomSma => (
                &[0.001, 0.25, 0.5, 1.0, 2.5, 3.0],
                &[-0.064, -0.192, -0.256, -0.384, -0.576, -0.704],
            ),
            CableFamily::FairviewF141 => (
                &[0.0, 1.0, 2.0, 5.0, 10.0, 18.0],
                &[0.0, -0.37, -0.54, -0.89, -1.35, -1.9],
            ),
            // Datasheet: 0, 4.59, 16.08, 65.62, 196.85 dB/100 m
            CableFamily::Rg58c => (
                &[0.0, 0.01, 0.1, 1.0, 5.0],
                &[0.0, -0.0459, -0.1608, -0.6562, -1.9685],
            ),
            // Datasheet: 0, 27.56, 62.34, 104.99 dB/100 m
            CableFamily::Rg174a => (
                &[0.0, 0.1, 0.4, 1.0],
                &[0.0, -0.2756, -0.6234, -1.0499],
            ),
        }
    }
}

/// A room-temperature cable of a given length.
#[derive(Debug, Clone, PartialEq)]
pub struct Cable {
    family: CableFamily,
    length_m: f64,
    gain: Table,
}

impl Cable {
    /// Create a cable; `length_m` must be non-negative.
    pub fn new(family: CableFamily, length_m: f64) -> Result<Self> {
        check_length(length_m)?;
        let (freqs, per_metre) = family.datasheet();
        let gain = gain_table(freqs, GHZ, per_metre)?.scaled(length_m);
        Ok(Self {
            family,
            length_m,
            gain,
        })
    }

    pub fn family(&self) -> CableFamily {
        self.family
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }
}

impl Component for Cable {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Passive
    }

    fn gain(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        self.gain.eval(frequency, policy)
    }

    fn noise(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        let gain = self.gain.eval(frequency, policy)?;
        Ok(lossy_line_noise(ROOM_TEMPERATURE_K, gain))
    }
}

/// Output noise `k_B·T·(1 − G)` of a lossy line with gain `gain_db`.
pub(crate) fn lossy_line_noise(temperature_k: f64, gain_db: Sample) -> Sample {
    gain_db.map(|g| thermal_noise_psd(temperature_k) * (1.0 - db_to_linear(g)).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfchain_core::BOLTZMANN;

    #[test]
    fn test_type_names_round_trip() {
        for family in CableFamily::ALL {
            assert_eq!(CableFamily::from_type_name(family.type_name()), Some(family));
        }
        assert_eq!(CableFamily::from_type_name("Coax"), None);
    }

    #[test]
    fn test_loss_scales_with_length() {
        let one = Cable::new(CableFamily::FairviewF141, 1.0).unwrap();
        let two = Cable::new(CableFamily::FairviewF141, 2.0).unwrap();
        let g1 = one.gain(5e9, RangePolicy::Strict).unwrap().value;
        let g2 = two.gain(5e9, RangePolicy::Strict).unwrap().value;
        assert!((g1 + 0.89).abs() < 1e-12);
        assert!((g2 - 2.0 * g1).abs() < 1e-12);
    }

    #[test]
    fn test_loss_is_single_counted_in_length() {
        // 0.5 m of RG58 at 1 GHz: 0.6562 dB/m
        let c = Cable::new(CableFamily::Rg58c, 0.5).unwrap();
        let g = c.gain(1e9, RangePolicy::Strict).unwrap().value;
        assert!((g + 0.3281).abs() < 1e-12, "gain {}", g);
    }

    #[test]
    fn test_zero_length_is_transparent_and_silent() {
        let c = Cable::new(CableFamily::Rg174a, 0.0).unwrap();
        let g = c.gain(0.4e9, RangePolicy::Strict).unwrap().value;
        assert_eq!(g, 0.0);
        assert_eq!(c.noise(0.4e9, RangePolicy::Strict).unwrap().value, 0.0);
    }

    #[test]
    fn test_thermal_noise_of_lossy_line() {
        let c = Cable::new(CableFamily::FairviewF141, 10.0).unwrap();
        let g = c.gain(10e9, RangePolicy::Strict).unwrap().value;
        let n = c.noise(10e9, RangePolicy::Strict).unwrap().value;
        let expected = BOLTZMANN * ROOM_TEMPERATURE_K * (1.0 - 10f64.powf(g / 10.0));
        assert!((n / expected - 1.0).abs() < 1e-12);
        assert!(n < BOLTZMANN * ROOM_TEMPERATURE_K);
    }

    #[test]
    fn test_out_of_range_behaviour() {
        let c = Cable::new(CableFamily::LcomSma, 1.0).unwrap();
        let s = c.gain(6e9, RangePolicy::Clamp).unwrap();
        assert!(s.clamped);
        assert!((s.value + 0.704).abs() < 1e-12);
        assert!(c.gain(6e9, RangePolicy::Strict).is_err());
        assert!(c.noise(6e9, RangePolicy::Clamp).unwrap().clamped);
    }

    #[test]
    fn test_negative_length_rejected() {
        assert!(Cable::new(CableFamily::Rg58c, -1.0).is_err());
    }
}
