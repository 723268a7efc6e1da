//! Human-readable chain summaries and per-component annotations.

use std::fmt::Write;

use rfchain_core::{
    Component,
    units::{format_frequency, psd_to_dbm_per_hz},
};
use rfchain_devices::Device;
use serde::Serialize;

use crate::chain::SignalChain;
use crate::error::Result;

/// Gain and noise figures for one component at a single frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub index: usize,
    pub label: String,
    /// Gain of this component (dB).
    pub gain_db: f64,
    /// Gain from the chain input through this component (dB).
    pub cumulative_gain_db: f64,
    /// Intrinsic output-referred noise of this component (W/Hz).
    pub intrinsic_noise: f64,
    /// Total noise at this component's output (W/Hz).
    pub noise_at_point: f64,
    pub clamped: bool,
}

impl<C: Component> SignalChain<C> {
    /// Annotate every component at `frequency`, in chain order.
    pub fn annotate(&self, frequency: f64) -> Result<Vec<Annotation>> {
        let policy = self.config().range_policy;
        let mut annotations = Vec::with_capacity(self.len());
        let mut cumulative = 0.0;
        for (index, (label, component)) in self.iter().enumerate() {
            let gain = component.gain(frequency, policy)?;
            let noise = self.noise_breakdown(index, frequency)?;
            cumulative += gain.value;
            let intrinsic = noise
                .contributions
                .last()
                .map(|c| c.intrinsic)
                .unwrap_or(0.0);
            annotations.push(Annotation {
                index,
                label: label.to_string(),
                gain_db: gain.value,
                cumulative_gain_db: cumulative,
                intrinsic_noise: intrinsic,
                noise_at_point: noise.total,
                clamped: gain.clamped || noise.clamped(),
            });
        }
        Ok(annotations)
    }

    /// Tabulate [`SignalChain::annotate`] as aligned text.
    pub fn annotation_table(&self, frequency: f64) -> Result<String> {
        let annotations = self.annotate(frequency)?;
        let mut out = String::new();
        let _ = writeln!(out, "Annotations at {}", format_frequency(frequency));
        let _ = writeln!(
            out,
            "  {:>3}  {:<24} {:>10} {:>10} {:>14} {:>14}",
            "#", "Label", "Gain(dB)", "Cum(dB)", "N_self(dBm/Hz)", "N_pt(dBm/Hz)"
        );
        for a in &annotations {
            let _ = writeln!(
                out,
                "  {:>3}  {:<24} {:>10.2} {:>10.2} {:>14.2} {:>14.2}{}",
                a.index,
                a.label,
                a.gain_db,
                a.cumulative_gain_db,
                psd_to_dbm_per_hz(a.intrinsic_noise),
                psd_to_dbm_per_hz(a.noise_at_point),
                if a.clamped { "  (clamped)" } else { "" }
            );
        }
        Ok(out)
    }
}

impl SignalChain<Device> {
    /// Index, label and type of every component.
    pub fn summary(&self) -> String {
        let rule = "-".repeat(60);
        let mut out = String::new();
        let _ = writeln!(out, "Signal Chain: {}", self.name());
        let _ = writeln!(out, "Total components: {}", self.len());
        let _ = writeln!(out);
        let _ = writeln!(out, "Component List:");
        let _ = writeln!(out, "{}", rule);
        for (index, (label, device)) in self.iter().enumerate() {
            let _ = writeln!(out, "  [{:2}] {:<30} ({})", index, label, device.type_name());
        }
        let _ = writeln!(out, "{}", rule);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfchain_devices::{Attenuator, FixedAmplifier};

    fn chain() -> SignalChain {
        let mut chain: SignalChain = SignalChain::new("pair");
        chain
            .add_component(Attenuator::new(-10.0, 300.0).unwrap(), "PAD")
            .unwrap();
        chain
            .add_component(FixedAmplifier::new(20.0, 10.0).unwrap(), "AMP")
            .unwrap();
        chain
    }

    #[test]
    fn test_summary_lists_components() {
        let text = chain().summary();
        assert!(text.starts_with("Signal Chain: pair\nTotal components: 2\n"));
        assert!(text.contains("[ 0] PAD"));
        assert!(text.contains("(FixedAmplifier)"));
    }

    #[test]
    fn test_annotations() {
        let chain = chain();
        let a = chain.annotate(1e9).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].cumulative_gain_db, -10.0);
        assert_eq!(a[1].cumulative_gain_db, 10.0);
        assert_eq!(a[0].noise_at_point, a[0].intrinsic_noise);
        assert_eq!(
            a[1].noise_at_point,
            chain.output_noise(1e9).unwrap().value
        );
        let table = chain.annotation_table(1e9).unwrap();
        assert!(table.contains("PAD"));
        assert!(table.starts_with("Annotations at 1.0000 GHz"));
    }
}
