//! The component contract shared by every hardware model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{RangePolicy, Sample, check_frequency};

/// Behavioural variant of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Loss element; noise, if modelled, follows from physical temperature.
    Passive,
    /// Gain element; noise follows from device characterization.
    Active,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Passive => write!(f, "passive"),
            ComponentKind::Active => write!(f, "active"),
        }
    }
}

/// An element of a signal chain.
///
/// `gain` is in dB (negative for loss) and `noise` is the intrinsic noise
/// PSD in W/Hz referred to the component's own output port. Both must be pure
/// functions of frequency and the component's construction parameters, so
/// implementations are shareable across threads without locking.
pub trait Component: fmt::Debug + Send + Sync {
    /// Passive or active.
    fn kind(&self) -> ComponentKind;

    /// Gain in dB at `frequency` (Hz).
    fn gain(&self, frequency: f64, policy: RangePolicy) -> Result<Sample>;

    /// Intrinsic output-referred noise PSD in W/Hz at `frequency` (Hz).
    ///
    /// Noiseless components keep the default of zero.
    fn noise(&self, frequency: f64, _policy: RangePolicy) -> Result<Sample> {
        check_frequency(frequency)?;
        Ok(Sample::exact(0.0))
    }

    /// Gain in dB at each of `frequencies`.
    fn gain_sweep(&self, frequencies: &[f64], policy: RangePolicy) -> Result<Response> {
        frequencies.iter().map(|&f| self.gain(f, policy)).collect()
    }

    /// Noise PSD in W/Hz at each of `frequencies`.
    fn noise_sweep(&self, frequencies: &[f64], policy: RangePolicy) -> Result<Response> {
        frequencies.iter().map(|&f| self.noise(f, policy)).collect()
    }
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn kind(&self) -> ComponentKind {
        (**self).kind()
    }

    fn gain(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        (**self).gain(frequency, policy)
    }

    fn noise(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
        (**self).noise(frequency, policy)
    }

    fn gain_sweep(&self, frequencies: &[f64], policy: RangePolicy) -> Result<Response> {
        (**self).gain_sweep(frequencies, policy)
    }

    fn noise_sweep(&self, frequencies: &[f64], policy: RangePolicy) -> Result<Response> {
        (**self).noise_sweep(frequencies, policy)
    }
}

/// Batch evaluation result, one entry per requested frequency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Evaluated values.
    pub values: Vec<f64>,
    /// Per-point clamp flags.
    pub clamped: Vec<bool>,
}

impl Response {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no points were evaluated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Point `index` as a [`Sample`].
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            value: *self.values.get(index)?,
            clamped: self.clamped[index],
        })
    }

    /// Iterate over the points as samples.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.values
            .iter()
            .zip(&self.clamped)
            .map(|(&value, &clamped)| Sample { value, clamped })
    }

    /// Number of points that relied on range clamping.
    pub fn clamped_count(&self) -> usize {
        self.clamped.iter().filter(|&&c| c).count()
    }

    /// True if any point relied on range clamping.
    pub fn any_clamped(&self) -> bool {
        self.clamped.iter().any(|&c| c)
    }
}

impl FromIterator<Sample> for Response {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let (values, clamped) = iter.into_iter().map(|s| (s.value, s.clamped)).unzip();
        Self { values, clamped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    #[derive(Debug)]
    struct Flat(f64);

    impl Component for Flat {
        fn kind(&self) -> ComponentKind {
            ComponentKind::Passive
        }

        fn gain(&self, frequency: f64, _policy: RangePolicy) -> Result<Sample> {
            check_frequency(frequency)?;
            Ok(Sample::exact(self.0))
        }
    }

    #[derive(Debug)]
    struct Tabled(Table);

    impl Component for Tabled {
        fn kind(&self) -> ComponentKind {
            ComponentKind::Active
        }

        fn gain(&self, frequency: f64, policy: RangePolicy) -> Result<Sample> {
            self.0.eval(frequency, policy)
        }
    }

    #[test]
    fn test_default_noise_is_zero() {
        let c = Flat(-3.0);
        assert_eq!(c.noise(1e9, RangePolicy::Strict).unwrap(), Sample::exact(0.0));
        assert!(c.noise(-1.0, RangePolicy::Clamp).is_err());
    }

    #[test]
    fn test_sweep_collects_clamp_flags() {
        let c = Tabled(Table::gain(&[1e6, 1e9], &[10.0, 20.0]).unwrap());
        let r = c.gain_sweep(&[1e3, 1e6, 1e9, 1e10], RangePolicy::Clamp).unwrap();
        assert_eq!(r.values, vec![10.0, 10.0, 20.0, 20.0]);
        assert_eq!(r.clamped, vec![true, false, false, true]);
        assert_eq!(r.clamped_count(), 2);
        assert!(r.any_clamped());
        assert_eq!(r.get(2), Some(Sample::exact(20.0)));
        assert_eq!(r.get(4), None);
    }

    #[test]
    fn test_sweep_strict_fails_on_first_out_of_range() {
        let c = Tabled(Table::gain(&[1e6, 1e9], &[10.0, 20.0]).unwrap());
        assert!(c.gain_sweep(&[1e6, 1e10], RangePolicy::Strict).is_err());
    }

    #[test]
    fn test_boxed_component() {
        let c: Box<dyn Component> = Box::new(Flat(-1.0));
        assert_eq!(c.kind(), ComponentKind::Passive);
        assert_eq!(c.gain(0.0, RangePolicy::Strict).unwrap().value, -1.0);
        assert_eq!(c.gain_sweep(&[], RangePolicy::Strict).unwrap().len(), 0);
    }
}
