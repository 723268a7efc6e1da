//! Frequency sweeps tabulated as CSV.

use std::path::Path;

use anyhow::{Context, Result};
use rfchain::{SignalChain, SweepConfig};

pub fn run_sweep(
    chain: &SignalChain,
    sweep: &SweepConfig,
    noise: bool,
    at: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let frequencies = sweep.frequencies()?;
    log::info!(
        "Sweeping {} from {:.4e} Hz to {:.4e} Hz ({} points)",
        chain.name(),
        sweep.fstart,
        sweep.fstop,
        frequencies.len()
    );

    let csv = if noise {
        match at {
            Some(label) => chain.noise_sweep(label, &frequencies)?.to_csv(),
            None => chain.output_noise_sweep(&frequencies)?.to_csv(),
        }
    } else {
        chain.gain_sweep(&frequencies)?.to_csv()
    };

    match output {
        Some(path) => {
            std::fs::write(path, csv)
                .with_context(|| format!("Failed to write sweep: {}", path.display()))?;
            println!("Wrote {} points to {}", frequencies.len(), path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}
