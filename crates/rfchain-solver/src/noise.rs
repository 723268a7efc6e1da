//! Noise budget at a reference point.

use serde::Serialize;

/// Noise delivered to the reference point by a single component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoiseContribution {
    /// Position in the chain.
    pub index: usize,
    pub label: String,
    /// Intrinsic output-referred noise PSD of the component (W/Hz).
    pub intrinsic: f64,
    /// Gain from the component's output to the reference point (dB).
    pub gain_to_reference_db: f64,
    /// Noise PSD this component delivers to the reference point (W/Hz).
    pub noise: f64,
    /// Share of the total at the reference point (%).
    pub percent: f64,
    /// True if any lookup behind this contribution was clamped.
    pub clamped: bool,
}

/// Total noise at a reference point with its per-component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoiseBreakdown {
    /// Frequency of evaluation (Hz).
    pub frequency: f64,
    /// Label of the reference point.
    pub reference: String,
    /// Total noise PSD at the reference (W/Hz).
    pub total: f64,
    /// Contributions in chain order, from the input up to the reference.
    pub contributions: Vec<NoiseContribution>,
}

impl NoiseBreakdown {
    pub(crate) fn new(
        frequency: f64,
        reference: String,
        mut contributions: Vec<NoiseContribution>,
    ) -> Self {
        let total: f64 = contributions.iter().map(|c| c.noise).sum();
        for c in &mut contributions {
            c.percent = if total > 0.0 {
                100.0 * c.noise / total
            } else {
                0.0
            };
        }
        Self {
            frequency,
            reference,
            total,
            contributions,
        }
    }

    pub fn clamped(&self) -> bool {
        self.contributions.iter().any(|c| c.clamped)
    }

    /// Contribution of the component with `label`.
    pub fn get(&self, label: &str) -> Option<&NoiseContribution> {
        self.contributions.iter().find(|c| c.label == label)
    }

    /// The largest non-zero contributor.
    pub fn dominant(&self) -> Option<&NoiseContribution> {
        self.contributions
            .iter()
            .filter(|c| c.noise > 0.0)
            .max_by(|a, b| a.noise.total_cmp(&b.noise))
    }

    /// Contributions sorted from largest to smallest.
    pub fn ranked(&self) -> Vec<&NoiseContribution> {
        let mut ranked: Vec<_> = self.contributions.iter().collect();
        ranked.sort_by(|a, b| b.noise.total_cmp(&a.noise));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribution(index: usize, label: &str, noise: f64) -> NoiseContribution {
        NoiseContribution {
            index,
            label: label.into(),
            intrinsic: noise,
            gain_to_reference_db: 0.0,
            noise,
            percent: 0.0,
            clamped: false,
        }
    }

    #[test]
    fn test_percentages_and_dominant() {
        let b = NoiseBreakdown::new(
            1e9,
            "C".into(),
            vec![
                contribution(0, "A", 1.0),
                contribution(1, "B", 3.0),
                contribution(2, "C", 0.0),
            ],
        );
        assert_eq!(b.total, 4.0);
        assert_eq!(b.get("A").unwrap().percent, 25.0);
        assert_eq!(b.get("B").unwrap().percent, 75.0);
        assert_eq!(b.dominant().unwrap().label, "B");
        let ranked: Vec<_> = b.ranked().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(ranked, ["B", "A", "C"]);
    }

    #[test]
    fn test_silent_chain_has_no_dominant() {
        let b = NoiseBreakdown::new(1e9, "A".into(), vec![contribution(0, "A", 0.0)]);
        assert_eq!(b.total, 0.0);
        assert_eq!(b.get("A").unwrap().percent, 0.0);
        assert!(b.dominant().is_none());
    }
}
