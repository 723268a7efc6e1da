//! Noise budget at a reference point.

use anyhow::Result;
use rfchain::SignalChain;
use rfchain::core::units::{format_frequency, format_psd};

/// Print total noise at `at` (the chain output by default) and each
/// component's contribution, largest first.
pub fn run_noise(chain: &SignalChain, frequency: f64, at: Option<&str>) -> Result<()> {
    if chain.is_empty() {
        let noise = chain.output_noise(frequency)?;
        println!("{}: empty chain, noise {:.4e} W/Hz", chain.name(), noise.value);
        return Ok(());
    }

    let breakdown = match at {
        Some(label) => chain.noise_breakdown(label, frequency)?,
        None => chain.noise_breakdown(chain.len() - 1, frequency)?,
    };

    println!(
        "Noise at {} ({})",
        breakdown.reference,
        format_frequency(frequency)
    );
    println!("{}", "=".repeat(60));
    println!("Total: {}", format_psd(breakdown.total));
    println!();
    println!(
        "  {:<24} {:>12} {:>12} {:>8}",
        "Contributor", "N (W/Hz)", "G_ref (dB)", "Share"
    );
    println!("{}", "-".repeat(60));
    for c in breakdown.ranked() {
        println!(
            "  {:<24} {:>12.4e} {:>12.2} {:>7.2}%",
            c.label, c.noise, c.gain_to_reference_db, c.percent
        );
    }
    if breakdown.clamped() {
        println!();
        println!("Note: some characterization data was clamped at this frequency.");
    }
    Ok(())
}
