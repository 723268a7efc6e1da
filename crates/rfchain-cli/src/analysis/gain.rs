//! Point-to-point gain.

use anyhow::Result;
use rfchain::SignalChain;
use rfchain::core::units::format_frequency;

/// Print the gain from `from` through `to`, defaulting to the chain ends.
pub fn run_gain(
    chain: &SignalChain,
    frequency: f64,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    if chain.is_empty() {
        let gain = chain.total_gain(frequency)?;
        println!("{}: empty chain, gain {:+.2} dB", chain.name(), gain.value);
        return Ok(());
    }

    let last = chain.len() - 1;
    let start = match from {
        Some(label) => chain.index_of(label)?,
        None => 0,
    };
    let end = match to {
        Some(label) => chain.index_of(label)?,
        None => last,
    };
    let gain = chain.gain_between(start, end, frequency)?;

    println!(
        "Gain {} -> {} at {}: {:+.2} dB{}",
        chain.label_at(start).unwrap_or_default(),
        chain.label_at(end).unwrap_or_default(),
        format_frequency(frequency),
        gain.value,
        if gain.clamped { " (clamped)" } else { "" }
    );
    Ok(())
}
