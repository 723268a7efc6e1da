//! Helpers for turning datasheet columns into characterization tables.

use rfchain_core::{Result, Table};

pub(crate) const MHZ: f64 = 1e6;
pub(crate) const GHZ: f64 = 1e9;

/// Frequency column in `unit` (e.g. [`GHZ`]) converted to Hz.
pub(crate) fn hz(column: &[f64], unit: f64) -> Vec<f64> {
    column.iter().map(|f| f * unit).collect()
}

/// Gain table from a frequency column in `unit` and gains in dB.
pub(crate) fn gain_table(frequencies: &[f64], unit: f64, gain_db: &[f64]) -> Result<Table> {
    Table::gain(&hz(frequencies, unit), gain_db)
}

/// Noise table from a frequency column in `unit` and PSDs in W/Hz.
pub(crate) fn noise_table(frequencies: &[f64], unit: f64, psd: &[f64]) -> Result<Table> {
    Table::noise(&hz(frequencies, unit), psd)
}
