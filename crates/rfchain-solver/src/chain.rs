//! The signal chain: an ordered, labelled sequence of components.
//!
//! Signal flows from index 0 (input) to the last component (output). Gain
//! queries sum stage gains in dB; noise queries refer every upstream
//! component's output noise to a reference point through the gain that
//! follows it:
//!
//! ```text
//! N(ref) = Σ_{i ≤ ref} N_i · 10^(G(i+1 ..= ref) / 10)
//! ```
//!
//! where `N_i` is the component's own output-referred noise PSD and
//! `G(i+1 ..= ref)` is the inclusive gain of the components between it and
//! the reference (0 dB when `i` is the reference).

use std::fmt;
use std::ops::RangeInclusive;

use indexmap::IndexMap;
use rfchain_core::{Component, Sample, check_frequency, units::db_to_linear};
use rfchain_devices::Device;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::noise::{NoiseBreakdown, NoiseContribution};
use crate::parallel::map_frequencies;
use crate::sweep::{GainSweep, NoiseSweep};

/// A reference to a component: by label or by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainRef<'a> {
    Label(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for ChainRef<'a> {
    fn from(label: &'a str) -> Self {
        ChainRef::Label(label)
    }
}

impl<'a> From<&'a String> for ChainRef<'a> {
    fn from(label: &'a String) -> Self {
        ChainRef::Label(label)
    }
}

impl From<usize> for ChainRef<'_> {
    fn from(index: usize) -> Self {
        ChainRef::Index(index)
    }
}

impl fmt::Display for ChainRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainRef::Label(label) => write!(f, "{}", label),
            ChainRef::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// An ordered sequence of uniquely labelled components.
///
/// Mutators are all-or-nothing: on error the chain is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalChain<C = Device> {
    name: String,
    components: IndexMap<String, C>,
    config: AnalysisConfig,
}

impl<C> Default for SignalChain<C> {
    fn default() -> Self {
        Self::new("Signal Chain")
    }
}

impl<C> SignalChain<C> {
    /// Create an empty chain.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: IndexMap::new(),
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Labels in chain order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// `(label, component)` pairs in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &C)> {
        self.components.iter().map(|(l, c)| (l.as_str(), c))
    }

    /// Resolve a label or index to a position.
    pub fn index_of<'a>(&self, reference: impl Into<ChainRef<'a>>) -> Result<usize> {
        match reference.into() {
            ChainRef::Label(label) => self
                .components
                .get_index_of(label)
                .ok_or_else(|| Error::UnknownLabel(label.to_string())),
            ChainRef::Index(index) if index < self.len() => Ok(index),
            ChainRef::Index(index) => Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    pub fn get<'a>(&self, reference: impl Into<ChainRef<'a>>) -> Option<&C> {
        let index = self.index_of(reference).ok()?;
        self.components.get_index(index).map(|(_, c)| c)
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.components.get_index(index).map(|(l, _)| l.as_str())
    }

    /// Append a component. Returns its index.
    pub fn add_component(
        &mut self,
        component: impl Into<C>,
        label: impl Into<String>,
    ) -> Result<usize> {
        let label = label.into();
        if self.components.contains_key(&label) {
            return Err(Error::DuplicateLabel(label));
        }
        let index = self.components.len();
        log::debug!("{}: adding {} at index {}", self.name, label, index);
        self.components.insert(label, component.into());
        Ok(index)
    }

    /// Remove a component, shifting later components up by one.
    pub fn remove_component(&mut self, label: &str) -> Result<C> {
        let component = self
            .components
            .shift_remove(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))?;
        log::debug!("{}: removed {}", self.name, label);
        Ok(component)
    }

    /// Move a component to `new_index`, shifting the components in between.
    pub fn reorder(&mut self, label: &str, new_index: usize) -> Result<()> {
        let from = self.index_of(label)?;
        if new_index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index: new_index,
                len: self.len(),
            });
        }
        self.components.move_index(from, new_index);
        log::debug!("{}: moved {} from {} to {}", self.name, label, from, new_index);
        Ok(())
    }

    pub fn clear(&mut self) {
        log::debug!("{}: cleared {} components", self.name, self.len());
        self.components.clear();
    }

    fn component_at(&self, index: usize) -> Result<(&str, &C)> {
        self.components
            .get_index(index)
            .map(|(label, component)| (label.as_str(), component))
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }
}

impl<C: Component> SignalChain<C> {
    /// Inclusive gain from `start` to `end` in dB, summed in chain order.
    pub fn gain_between<'a, 'b>(
        &self,
        start: impl Into<ChainRef<'a>>,
        end: impl Into<ChainRef<'b>>,
        frequency: f64,
    ) -> Result<Sample> {
        let start = self.index_of(start)?;
        let end = self.index_of(end)?;
        if start > end {
            return Err(Error::InvalidOrder { start, end });
        }
        let gain = self.sum_gains(start..=end, frequency)?;
        warn_if_clamped(&self.name, "gain", frequency, gain.clamped);
        Ok(gain)
    }

    /// Gain of the whole chain in dB; 0 dB when empty.
    pub fn total_gain(&self, frequency: f64) -> Result<Sample> {
        if self.is_empty() {
            check_frequency(frequency)?;
            return Ok(Sample::exact(0.0));
        }
        self.gain_between(0usize, self.len() - 1, frequency)
    }

    /// Total noise PSD (W/Hz) at the output of `reference`.
    pub fn noise_at_point<'a>(
        &self,
        reference: impl Into<ChainRef<'a>>,
        frequency: f64,
    ) -> Result<Sample> {
        let breakdown = self.noise_breakdown(reference, frequency)?;
        Ok(Sample {
            value: breakdown.total,
            clamped: breakdown.clamped(),
        })
    }

    /// Noise at `reference` together with each upstream component's share.
    pub fn noise_breakdown<'a>(
        &self,
        reference: impl Into<ChainRef<'a>>,
        frequency: f64,
    ) -> Result<NoiseBreakdown> {
        let reference = self.index_of(reference)?;
        let breakdown = self.breakdown_at(reference, frequency)?;
        warn_if_clamped(&self.name, "noise", frequency, breakdown.clamped());
        Ok(breakdown)
    }

    /// Noise PSD (W/Hz) at the chain output; 0 W/Hz when empty.
    pub fn output_noise(&self, frequency: f64) -> Result<Sample> {
        if self.is_empty() {
            check_frequency(frequency)?;
            return Ok(Sample::exact(0.0));
        }
        self.noise_at_point(self.len() - 1, frequency)
    }

    /// Stage and total gains over a set of frequencies.
    pub fn gain_sweep(&self, frequencies: &[f64]) -> Result<GainSweep> {
        let policy = self.config.range_policy;
        let points = map_frequencies(frequencies, &self.config.parallel, |f| {
            check_frequency(f)?;
            self.components
                .values()
                .map(|c| c.gain(f, policy))
                .collect::<rfchain_core::Result<Vec<_>>>()
                .map_err(Error::from)
        })?;

        let mut stage_gain_db = vec![Vec::with_capacity(frequencies.len()); self.len()];
        let mut total_gain_db = Vec::with_capacity(frequencies.len());
        let mut clamped = Vec::with_capacity(frequencies.len());
        for stages in points {
            let mut total = Sample::exact(0.0);
            for (column, gain) in stage_gain_db.iter_mut().zip(&stages) {
                column.push(gain.value);
                total = total.zip_with(*gain, |a, b| a + b);
            }
            total_gain_db.push(total.value);
            clamped.push(total.clamped);
        }

        let sweep = GainSweep {
            frequencies: frequencies.to_vec(),
            labels: self.components.keys().cloned().collect(),
            stage_gain_db,
            total_gain_db,
            clamped,
        };
        warn_sweep_clamped(&self.name, "gain", sweep.clamped_count(), sweep.len());
        Ok(sweep)
    }

    /// Noise at `reference` over a set of frequencies.
    pub fn noise_sweep<'a>(
        &self,
        reference: impl Into<ChainRef<'a>>,
        frequencies: &[f64],
    ) -> Result<NoiseSweep> {
        let reference = self.index_of(reference)?;
        let points = map_frequencies(frequencies, &self.config.parallel, |f| {
            self.breakdown_at(reference, f)
        })?;

        let mut contributions = vec![Vec::with_capacity(frequencies.len()); reference + 1];
        let mut total = Vec::with_capacity(frequencies.len());
        let mut clamped = Vec::with_capacity(frequencies.len());
        for point in &points {
            for (column, c) in contributions.iter_mut().zip(&point.contributions) {
                column.push(c.noise);
            }
            total.push(point.total);
            clamped.push(point.clamped());
        }

        let sweep = NoiseSweep {
            frequencies: frequencies.to_vec(),
            reference: self.component_at(reference)?.0.to_string(),
            labels: self.labels().take(reference + 1).map(str::to_string).collect(),
            contributions,
            total,
            clamped,
        };
        warn_sweep_clamped(&self.name, "noise", sweep.clamped_count(), sweep.len());
        Ok(sweep)
    }

    /// Noise at the chain output over a set of frequencies.
    pub fn output_noise_sweep(&self, frequencies: &[f64]) -> Result<NoiseSweep> {
        if self.is_empty() {
            if let Some(&f) = frequencies.iter().find(|f| check_frequency(**f).is_err()) {
                return Err(rfchain_core::Error::InvalidFrequency(f).into());
            }
            return Ok(NoiseSweep {
                frequencies: frequencies.to_vec(),
                reference: String::new(),
                labels: Vec::new(),
                contributions: Vec::new(),
                total: vec![0.0; frequencies.len()],
                clamped: vec![false; frequencies.len()],
            });
        }
        self.noise_sweep(self.len() - 1, frequencies)
    }

    fn sum_gains(&self, range: RangeInclusive<usize>, frequency: f64) -> Result<Sample> {
        let policy = self.config.range_policy;
        let mut total = Sample::exact(0.0);
        for index in range {
            let gain = self.component_at(index)?.1.gain(frequency, policy)?;
            total = total.zip_with(gain, |a, b| a + b);
        }
        Ok(total)
    }

    fn breakdown_at(&self, reference: usize, frequency: f64) -> Result<NoiseBreakdown> {
        let policy = self.config.range_policy;
        let mut contributions = Vec::with_capacity(reference + 1);
        for index in 0..=reference {
            let (label, component) = self.component_at(index)?;
            let intrinsic = component.noise(frequency, policy)?;
            let downstream = if index < reference {
                self.sum_gains(index + 1..=reference, frequency)?
            } else {
                check_frequency(frequency)?;
                Sample::exact(0.0)
            };
            contributions.push(NoiseContribution {
                index,
                label: label.to_string(),
                intrinsic: intrinsic.value,
                gain_to_reference_db: downstream.value,
                noise: intrinsic.value * db_to_linear(downstream.value),
                percent: 0.0,
                clamped: intrinsic.clamped || downstream.clamped,
            });
        }
        Ok(NoiseBreakdown::new(
            frequency,
            self.component_at(reference)?.0.to_string(),
            contributions,
        ))
    }
}

impl SignalChain<Device> {
    /// Append a device under an automatic `{type}_{n}` label, using the
    /// lowest `n` not already taken.
    pub fn push(&mut self, device: impl Into<Device>) -> Result<String> {
        let device = device.into();
        let label = (0..=self.len())
            .map(|n| format!("{}_{}", device.type_name(), n))
            .find(|label| !self.components.contains_key(label))
            .ok_or_else(|| Error::DuplicateLabel(device.type_name().to_string()))?;
        self.add_component(device, label.clone())?;
        Ok(label)
    }
}

fn warn_if_clamped(chain: &str, quantity: &str, frequency: f64, clamped: bool) {
    if clamped {
        log::warn!(
            "{}: {} at {:.6e} Hz used clamped characterization data",
            chain,
            quantity,
            frequency
        );
    }
}

fn warn_sweep_clamped(chain: &str, quantity: &str, clamped: usize, total: usize) {
    if clamped > 0 {
        log::warn!(
            "{}: {} sweep used clamped characterization data at {} of {} points",
            chain,
            quantity,
            clamped,
            total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfchain_core::{BOLTZMANN, ComponentKind, RangePolicy};

    /// Flat test stage with a fixed gain and output noise.
    #[derive(Debug, Clone, PartialEq)]
    struct Stage {
        gain_db: f64,
        noise: f64,
    }

    impl Component for Stage {
        fn kind(&self) -> ComponentKind {
            ComponentKind::Passive
        }

        fn gain(&self, frequency: f64, _policy: RangePolicy) -> rfchain_core::Result<Sample> {
            check_frequency(frequency)?;
            Ok(Sample::exact(self.gain_db))
        }

        fn noise(&self, frequency: f64, _policy: RangePolicy) -> rfchain_core::Result<Sample> {
            check_frequency(frequency)?;
            Ok(Sample::exact(self.noise))
        }
    }

    fn stage(gain_db: f64, noise: f64) -> Stage {
        Stage { gain_db, noise }
    }

    fn abc() -> SignalChain<Stage> {
        let mut chain = SignalChain::new("abc");
        chain.add_component(stage(-3.0, 1.0), "A").unwrap();
        chain.add_component(stage(10.0, 2.0), "B").unwrap();
        chain.add_component(stage(20.0, 4.0), "C").unwrap();
        chain
    }

    #[test]
    fn test_add_rejects_duplicate_label() {
        let mut chain = abc();
        assert!(matches!(
            chain.add_component(stage(0.0, 0.0), "B"),
            Err(Error::DuplicateLabel(_))
        ));
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.add_component(stage(0.0, 0.0), "D").unwrap(), 3);
    }

    #[test]
    fn test_references() {
        let chain = abc();
        assert_eq!(chain.index_of("C").unwrap(), 2);
        assert_eq!(chain.index_of(1usize).unwrap(), 1);
        assert!(matches!(chain.index_of("Z"), Err(Error::UnknownLabel(_))));
        assert!(matches!(
            chain.index_of(3usize),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(chain.get("B"), Some(&stage(10.0, 2.0)));
        assert_eq!(chain.label_at(0), Some("A"));
    }

    #[test]
    fn test_gain_between() {
        let chain = abc();
        assert_eq!(chain.gain_between("A", "B", 1e9).unwrap().value, 7.0);
        assert_eq!(chain.gain_between("B", "B", 1e9).unwrap().value, 10.0);
        assert_eq!(chain.total_gain(1e9).unwrap().value, 27.0);
        assert!(matches!(
            chain.gain_between("C", "A", 1e9),
            Err(Error::InvalidOrder { start: 2, end: 0 })
        ));
        assert!(matches!(
            chain.gain_between("A", "X", 1e9),
            Err(Error::UnknownLabel(_))
        ));
        assert!(matches!(
            chain.gain_between("A", "C", -1.0),
            Err(Error::Core(rfchain_core::Error::InvalidFrequency(_)))
        ));
    }

    #[test]
    fn test_noise_cascade() {
        let chain = abc();
        let b = chain.noise_breakdown("C", 1e9).unwrap();
        // A through B and C, B through C, C itself
        let expected = [1.0 * 1e3, 2.0 * 1e2, 4.0];
        for (c, e) in b.contributions.iter().zip(expected) {
            assert!((c.noise / e - 1.0).abs() < 1e-12, "{}: {}", c.label, c.noise);
        }
        assert!((b.total - 1204.0).abs() < 1e-9);
        assert_eq!(b.dominant().unwrap().label, "A");
        assert_eq!(chain.output_noise(1e9).unwrap().value, b.total);

        // At B only A and B contribute
        let at_b = chain.noise_at_point("B", 1e9).unwrap().value;
        assert!((at_b - (10.0 + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut chain = abc();
        let removed = chain.remove_component("B").unwrap();
        assert_eq!(removed, stage(10.0, 2.0));
        assert_eq!(chain.labels().collect::<Vec<_>>(), ["A", "C"]);
        assert!(matches!(
            chain.remove_component("B"),
            Err(Error::UnknownLabel(_))
        ));
        chain.clear();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_reorder() {
        let mut chain = abc();
        chain.reorder("C", 0).unwrap();
        assert_eq!(chain.labels().collect::<Vec<_>>(), ["C", "A", "B"]);
        chain.reorder("C", 2).unwrap();
        assert_eq!(chain.labels().collect::<Vec<_>>(), ["A", "B", "C"]);
        assert!(matches!(
            chain.reorder("A", 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(chain.reorder("Z", 0), Err(Error::UnknownLabel(_))));
        assert_eq!(chain.labels().collect::<Vec<_>>(), ["A", "B", "C"]);
    }

    #[test]
    fn test_empty_chain() {
        let chain: SignalChain<Stage> = SignalChain::default();
        assert_eq!(chain.total_gain(1e9).unwrap(), Sample::exact(0.0));
        assert_eq!(chain.output_noise(1e9).unwrap(), Sample::exact(0.0));
        assert!(chain.output_noise(f64::NAN).is_err());
        let sweep = chain.output_noise_sweep(&[1e8, 1e9]).unwrap();
        assert_eq!(sweep.total, vec![0.0, 0.0]);
        assert!(chain.gain_sweep(&[1e9]).unwrap().labels.is_empty());
    }

    #[test]
    fn test_sweeps_match_point_queries() {
        let chain = abc();
        let freqs = [1e8, 5e8, 1e9];
        let gain = chain.gain_sweep(&freqs).unwrap();
        let noise = chain.noise_sweep("C", &freqs).unwrap();
        for (i, &f) in freqs.iter().enumerate() {
            assert_eq!(gain.total_gain_db[i], chain.total_gain(f).unwrap().value);
            assert_eq!(noise.total[i], chain.output_noise(f).unwrap().value);
        }
        assert_eq!(gain.stage("B").unwrap(), &[10.0, 10.0, 10.0]);
        assert_eq!(noise.labels, ["A", "B", "C"]);
        assert!(chain.gain_sweep(&[1e9, -5.0]).is_err());
    }

    #[test]
    fn test_push_generates_labels() {
        let mut chain: SignalChain = SignalChain::new("auto");
        let att = rfchain_devices::Attenuator::new(-3.0, 300.0).unwrap();
        assert_eq!(chain.push(att.clone()).unwrap(), "Attenuator_0");
        assert_eq!(chain.push(att).unwrap(), "Attenuator_1");
        let n = chain.output_noise(1e9).unwrap().value;
        let expected = BOLTZMANN * 300.0 * (10f64.powf(-0.3) + 1.0);
        assert!((n / expected - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_push_after_remove_reuses_free_label() {
        let mut chain: SignalChain = SignalChain::new("auto");
        let att = rfchain_devices::Attenuator::new(-3.0, 300.0).unwrap();
        chain.push(att.clone()).unwrap();
        chain.push(att.clone()).unwrap();
        chain.remove_component("Attenuator_0").unwrap();

        assert_eq!(chain.push(att.clone()).unwrap(), "Attenuator_0");
        assert_eq!(chain.push(att).unwrap(), "Attenuator_2");
        assert_eq!(
            chain.labels().collect::<Vec<_>>(),
            ["Attenuator_1", "Attenuator_0", "Attenuator_2"]
        );
    }
}
