//! Frequency sweeps: point generation and tabulated results.

use std::path::Path;

use rfchain_core::units::psd_to_dbm_per_hz;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Frequency spacing of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepType {
    /// Linear frequency spacing.
    #[default]
    Linear,
    /// Logarithmic spacing, points per decade.
    Decade,
    /// Logarithmic spacing, points per octave.
    Octave,
}

/// Sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Start frequency (Hz).
    pub fstart: f64,
    /// Stop frequency (Hz).
    pub fstop: f64,
    /// Number of points (total for Linear, per decade/octave for log sweeps).
    pub num_points: usize,
    #[serde(default)]
    pub sweep_type: SweepType,
}

impl SweepConfig {
    pub fn linear(fstart: f64, fstop: f64, num_points: usize) -> Self {
        Self {
            fstart,
            fstop,
            num_points,
            sweep_type: SweepType::Linear,
        }
    }

    pub fn decade(fstart: f64, fstop: f64, points_per_decade: usize) -> Self {
        Self {
            fstart,
            fstop,
            num_points: points_per_decade,
            sweep_type: SweepType::Decade,
        }
    }

    pub fn octave(fstart: f64, fstop: f64, points_per_octave: usize) -> Self {
        Self {
            fstart,
            fstop,
            num_points: points_per_octave,
            sweep_type: SweepType::Octave,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.fstart.is_finite() || !self.fstop.is_finite() || self.fstart < 0.0 {
            return Err(Error::InvalidSweep(format!(
                "bad frequency bounds {} .. {}",
                self.fstart, self.fstop
            )));
        }
        if self.fstop < self.fstart {
            return Err(Error::InvalidSweep(format!(
                "stop frequency {} below start frequency {}",
                self.fstop, self.fstart
            )));
        }
        if self.num_points == 0 {
            return Err(Error::InvalidSweep("sweep needs at least one point".into()));
        }
        if self.sweep_type != SweepType::Linear && self.fstart <= 0.0 {
            return Err(Error::InvalidSweep(
                "logarithmic sweeps need a positive start frequency".into(),
            ));
        }
        Ok(())
    }

    /// Generate the sweep frequencies in Hz, ascending.
    pub fn frequencies(&self) -> Result<Vec<f64>> {
        self.validate()?;
        Ok(generate_frequencies(self))
    }
}

/// Frequencies for a validated sweep.
fn generate_frequencies(config: &SweepConfig) -> Vec<f64> {
    match config.sweep_type {
        SweepType::Linear => {
            if config.num_points <= 1 {
                return vec![config.fstart];
            }
            let step = (config.fstop - config.fstart) / (config.num_points as f64 - 1.0);
            (0..config.num_points)
                .map(|i| config.fstart + step * i as f64)
                .collect()
        }
        SweepType::Decade => log_spaced(config, (config.fstop / config.fstart).log10()),
        SweepType::Octave => log_spaced(config, (config.fstop / config.fstart).log2()),
    }
}

fn log_spaced(config: &SweepConfig, spans: f64) -> Vec<f64> {
    // Tolerance keeps an exact number of decades/octaves from gaining a point.
    let total_points = (spans * config.num_points as f64 - 1e-9).ceil().max(0.0) as usize + 1;
    if total_points <= 1 {
        return vec![config.fstart];
    }
    let log_step = (config.fstop.ln() - config.fstart.ln()) / (total_points - 1) as f64;
    (0..total_points)
        .map(|i| (config.fstart.ln() + i as f64 * log_step).exp())
        .collect()
}

/// Quote a CSV field when it contains a separator or quote.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Gain of every stage and of the whole chain over a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GainSweep {
    /// Frequency points in Hz.
    pub frequencies: Vec<f64>,
    /// Component labels in chain order.
    pub labels: Vec<String>,
    /// Gain in dB of each component (outer index) at each frequency.
    pub stage_gain_db: Vec<Vec<f64>>,
    /// Total chain gain in dB at each frequency.
    pub total_gain_db: Vec<f64>,
    /// Whether any stage was evaluated outside its characterization.
    pub clamped: Vec<bool>,
}

impl GainSweep {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn clamped_count(&self) -> usize {
        self.clamped.iter().filter(|c| **c).count()
    }

    /// Gain of one stage at each frequency.
    pub fn stage(&self, label: &str) -> Option<&[f64]> {
        let idx = self.labels.iter().position(|l| l == label)?;
        Some(&self.stage_gain_db[idx])
    }

    /// Export to CSV: frequency, total gain, one column per stage, clamp flag.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        let mut headers = vec!["Frequency(Hz)".to_string(), "TotalGain(dB)".to_string()];
        for label in &self.labels {
            headers.push(csv_field(&format!("{}(dB)", label)));
        }
        headers.push("Clamped".to_string());
        csv.push_str(&headers.join(","));
        csv.push('\n');

        for i in 0..self.frequencies.len() {
            let mut row = vec![
                format!("{:.6e}", self.frequencies[i]),
                format!("{:.4}", self.total_gain_db[i]),
            ];
            for stage in &self.stage_gain_db {
                row.push(format!("{:.4}", stage[i]));
            }
            row.push(self.clamped[i].to_string());
            csv.push_str(&row.join(","));
            csv.push('\n');
        }

        csv
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.to_csv())
    }
}

/// Noise at a reference point over a sweep, with per-component contributions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoiseSweep {
    /// Frequency points in Hz.
    pub frequencies: Vec<f64>,
    /// Label of the reference point; empty for an empty chain.
    pub reference: String,
    /// Labels of the contributing components, chain order, up to the reference.
    pub labels: Vec<String>,
    /// Noise PSD in W/Hz each component delivers to the reference (outer
    /// index) at each frequency.
    pub contributions: Vec<Vec<f64>>,
    /// Total noise PSD at the reference in W/Hz.
    pub total: Vec<f64>,
    pub clamped: Vec<bool>,
}

impl NoiseSweep {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn clamped_count(&self) -> usize {
        self.clamped.iter().filter(|c| **c).count()
    }

    /// Contribution of one component at each frequency.
    pub fn contribution(&self, label: &str) -> Option<&[f64]> {
        let idx = self.labels.iter().position(|l| l == label)?;
        Some(&self.contributions[idx])
    }

    /// Percentage of the total contributed by each component at point `i`.
    pub fn percentages_at(&self, i: usize) -> Vec<f64> {
        let total = self.total.get(i).copied().unwrap_or(0.0);
        self.contributions
            .iter()
            .map(|c| if total > 0.0 { 100.0 * c[i] / total } else { 0.0 })
            .collect()
    }

    /// Get the dominant noise contributor at the first sweep point at or
    /// above `frequency`.
    pub fn dominant_contributor_at(&self, frequency: f64) -> Option<&str> {
        let idx = self.frequencies.iter().position(|&f| f >= frequency)?;
        self.labels
            .iter()
            .zip(&self.contributions)
            .filter(|(_, c)| c[idx] > 0.0)
            .max_by(|(_, a), (_, b)| a[idx].total_cmp(&b[idx]))
            .map(|(label, _)| label.as_str())
    }

    /// Export to CSV: frequency, total noise (W/Hz and dBm/Hz), one column
    /// per contributor, clamp flag.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        let mut headers = vec![
            "Frequency(Hz)".to_string(),
            "Noise(W/Hz)".to_string(),
            "Noise(dBm/Hz)".to_string(),
        ];
        for label in &self.labels {
            headers.push(csv_field(&format!("{}(W/Hz)", label)));
        }
        headers.push("Clamped".to_string());
        csv.push_str(&headers.join(","));
        csv.push('\n');

        for i in 0..self.frequencies.len() {
            let mut row = vec![
                format!("{:.6e}", self.frequencies[i]),
                format!("{:.6e}", self.total[i]),
                format!("{:.4}", psd_to_dbm_per_hz(self.total[i])),
            ];
            for contrib in &self.contributions {
                row.push(format!("{:.6e}", contrib[i]));
            }
            row.push(self.clamped[i].to_string());
            csv.push_str(&row.join(","));
            csv.push('\n');
        }

        csv
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.to_csv())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_linear_frequencies() {
        let freqs = SweepConfig::linear(1.0, 100.0, 100).frequencies().unwrap();
        assert_eq!(freqs.len(), 100);
        assert!((freqs[0] - 1.0).abs() < 1e-10);
        assert!((freqs[99] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_generate_decade_frequencies() {
        let freqs = SweepConfig::decade(1e6, 1e9, 10).frequencies().unwrap();
        // 3 decades at 10 points per decade, plus the end point
        assert_eq!(freqs.len(), 31);
        assert!((freqs[0] - 1e6).abs() < 1e-3);
        assert!((freqs[10] / 1e7 - 1.0).abs() < 1e-9);
        assert!((freqs[30] / 1e9 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_generate_octave_frequencies() {
        let freqs = SweepConfig::octave(1e8, 1.6e9, 2).frequencies().unwrap();
        assert_eq!(freqs.len(), 9);
        assert!((freqs[2] / 2e8 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(SweepConfig::linear(5e8, 5e8, 1).frequencies().unwrap(), vec![5e8]);
        assert_eq!(SweepConfig::decade(5e8, 5e8, 10).frequencies().unwrap(), vec![5e8]);
    }

    #[test]
    fn test_invalid_sweeps() {
        assert!(SweepConfig::linear(2.0, 1.0, 10).frequencies().is_err());
        assert!(SweepConfig::linear(1.0, 2.0, 0).frequencies().is_err());
        assert!(SweepConfig::linear(-1.0, 2.0, 5).frequencies().is_err());
        assert!(SweepConfig::decade(0.0, 1e9, 10).frequencies().is_err());
        assert!(SweepConfig::linear(0.0, 1e9, 3).frequencies().is_ok());
    }

    #[test]
    fn test_gain_csv_layout() {
        let sweep = GainSweep {
            frequencies: vec![1e9, 2e9],
            labels: vec!["IN".into(), "AMP, cold".into()],
            stage_gain_db: vec![vec![-10.0, -10.0], vec![30.0, 28.5]],
            total_gain_db: vec![20.0, 18.5],
            clamped: vec![false, true],
        };
        let csv = sweep.to_csv();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Frequency(Hz),TotalGain(dB),IN(dB),\"AMP, cold(dB)\",Clamped"
        );
        assert!(lines[2].starts_with("2.000000e9,18.5000,-10.0000,28.5000"));
        assert!(lines[2].ends_with("true"));
        assert_eq!(sweep.clamped_count(), 1);
        assert_eq!(sweep.stage("IN"), Some(&[-10.0, -10.0][..]));
    }

    #[test]
    fn test_noise_dominant_contributor() {
        let sweep = NoiseSweep {
            frequencies: vec![1e9, 2e9],
            reference: "AMP".into(),
            labels: vec!["IN".into(), "AMP".into()],
            contributions: vec![vec![3.0, 1.0], vec![1.0, 3.0]],
            total: vec![4.0, 4.0],
            clamped: vec![false, false],
        };
        assert_eq!(sweep.dominant_contributor_at(1e9), Some("IN"));
        assert_eq!(sweep.dominant_contributor_at(1.5e9), Some("AMP"));
        assert_eq!(sweep.dominant_contributor_at(3e9), None);
        assert_eq!(sweep.percentages_at(0), vec![75.0, 25.0]);
        assert!(sweep.to_csv().starts_with("Frequency(Hz),Noise(W/Hz),Noise(dBm/Hz),IN(W/Hz)"));
    }
}
