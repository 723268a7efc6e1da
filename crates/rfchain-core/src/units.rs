//! Physical constants, power/ratio conversions and SI prefix handling.
//!
//! Everything here is a pure function. Gains are in dB, absolute powers in
//! W or dBm, and noise power spectral densities in W/Hz.

/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Reference temperature for noise figure definitions (K).
pub const T0: f64 = 290.0;

/// Convert a power ratio in dB to a linear ratio.
pub fn db_to_linear(gain_db: f64) -> f64 {
    10f64.powf(gain_db / 10.0)
}

/// Convert a linear power ratio to dB.
pub fn linear_to_db(ratio: f64) -> f64 {
    10.0 * ratio.log10()
}

/// Convert an absolute power in dBm to watts.
pub fn dbm_to_watts(power_dbm: f64) -> f64 {
    db_to_linear(power_dbm) * 1e-3
}

/// Convert an absolute power in watts to dBm.
pub fn watts_to_dbm(power_w: f64) -> f64 {
    linear_to_db(power_w * 1e3)
}

/// Thermal noise power spectral density `k_B·T` (W/Hz) of a matched
/// resistive source at physical temperature `temperature_k`.
pub fn thermal_noise_psd(temperature_k: f64) -> f64 {
    BOLTZMANN * temperature_k
}

/// Equivalent noise temperature (K) for a noise figure in dB.
///
/// `Te = T0 · (10^(NF/10) − 1)`
pub fn noise_temperature_from_figure(noise_figure_db: f64) -> f64 {
    T0 * (db_to_linear(noise_figure_db) - 1.0)
}

/// Noise figure (dB) for an equivalent noise temperature in K.
pub fn noise_figure_from_temperature(noise_temperature_k: f64) -> f64 {
    linear_to_db(1.0 + noise_temperature_k / T0)
}

/// Express a noise PSD in dBm/Hz. Zero maps to negative infinity.
pub fn psd_to_dbm_per_hz(psd_w_per_hz: f64) -> f64 {
    watts_to_dbm(psd_w_per_hz)
}

/// Parse a value with optional SI suffix, e.g. `"1.5G"`, `"500MEG"`, `"2.4GHz"`.
///
/// Supported suffixes:
/// - T (tera, 1e12)
/// - G (giga, 1e9)
/// - MEG (mega, 1e6)
/// - K (kilo, 1e3)
/// - M (milli, 1e-3)
/// - U (micro, 1e-6)
/// - N (nano, 1e-9)
/// - P (pico, 1e-12)
/// - F (femto, 1e-15)
///
/// A trailing `Hz` unit is accepted and ignored. For frequency input `"MHZ"`
/// means mega, not milli.
pub fn parse_value(s: &str) -> Option<f64> {
    let upper = s.trim().to_uppercase();

    if let Ok(v) = upper.parse::<f64>() {
        return Some(v);
    }

    let (s, had_hz) = match upper.strip_suffix("HZ") {
        Some(rest) => (rest.trim_end().to_string(), true),
        None => (upper, false),
    };

    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'E')
        .unwrap_or(s.len());

    if num_end == 0 {
        return None;
    }

    let (num_str, suffix) = s.split_at(num_end);
    let value: f64 = num_str.parse().ok()?;

    let multiplier = match suffix.trim() {
        "T" => 1e12,
        "G" => 1e9,
        "MEG" => 1e6,
        "M" if had_hz => 1e6,
        "K" => 1e3,
        "" => 1.0,
        "M" => 1e-3,
        "U" => 1e-6,
        "N" => 1e-9,
        "P" => 1e-12,
        "F" => 1e-15,
        _ => return None,
    };

    Some(value * multiplier)
}

/// Engineering prefixes from yocto (1e-24) to tera (1e12), so both carrier
/// frequencies and noise densities near `k_B·T` at millikelvin render with a
/// prefix.
const PREFIXES: [&str; 13] = ["y", "z", "a", "f", "p", "n", "u", "m", "", "k", "M", "G", "T"];
/// Index of the empty prefix in [`PREFIXES`].
const UNIT_PREFIX: i32 = 8;

/// Format `value` in `unit` with an engineering prefix, e.g. `1.5000 GHz`.
///
/// Zero and non-finite values are printed without a prefix.
pub fn format_si(value: f64, unit: &str) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{:.4} {}", value, unit);
    }
    let mut exponent = (value.abs().log10() / 3.0).floor() as i32;
    exponent = exponent.clamp(-UNIT_PREFIX, PREFIXES.len() as i32 - 1 - UNIT_PREFIX);
    let mut scaled = value / 10f64.powi(3 * exponent);
    // 999.99996 MHz prints as 1.0000 GHz, not 1000.0000 MHz
    if scaled.abs() >= 999.99995 && exponent < PREFIXES.len() as i32 - 1 - UNIT_PREFIX {
        exponent += 1;
        scaled /= 1e3;
    }
    let prefix = PREFIXES[(exponent + UNIT_PREFIX) as usize];
    format!("{:.4} {}{}", scaled, prefix, unit)
}

/// Format a frequency in Hz, e.g. `1.5000 GHz`.
pub fn format_frequency(frequency_hz: f64) -> String {
    format_si(frequency_hz, "Hz")
}

/// Format a noise PSD in W/Hz alongside its dBm/Hz level, e.g.
/// `4.1419 zW/Hz (-173.83 dBm/Hz)`.
pub fn format_psd(psd_w_per_hz: f64) -> String {
    format!(
        "{} ({:.2} dBm/Hz)",
        format_si(psd_w_per_hz, "W/Hz"),
        psd_to_dbm_per_hz(psd_w_per_hz)
    )
}
