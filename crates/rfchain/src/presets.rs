//! Ready-made reference chains.

use rfchain_devices::{
    Ad9082Adc, AmplifierModel, Attenuator, Cable, CableFamily, CryoCable, CryoCableFamily,
    DatasheetAmplifier, FilterModel, HighPassFilter,
};
use rfchain_solver::{Result, SignalChain};

/// Name of the [`simple_cryogenic`] chain.
pub const SIMPLE_CRYOGENIC: &str = "Simple Cryogenic System";

/// Name of the [`lossless_loopback`] chain.
pub const LOSSLESS_LOOPBACK: &str = "Lossless Loopback";
/// Name of the [`mcgill_full`] chain.
pub const MCGILL_FULL: &str = "McGill Full";
/// Name of the [`slim_deployment_2024`] chain.
pub const SLIM_DEPLOYMENT_2024: &str = "SLIM Deployment 2024";
/// Name of the [`slim_deployment_2025`] chain.
pub const SLIM_DEPLOYMENT_2025: &str = "SLIM Deployment 2025";

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &[
    SIMPLE_CRYOGENIC,
    LOSSLESS_LOOPBACK,
    MCGILL_FULL,
    SLIM_DEPLOYMENT_2024,
    SLIM_DEPLOYMENT_2025,
];

type Builder = fn() -> Result<SignalChain>;

/// `(name, short alias, builder)`.
const PRESETS: &[(&str, &str, Builder)] = &[
    (SIMPLE_CRYOGENIC, "simple", simple_cryogenic),
    (LOSSLESS_LOOPBACK, "default", lossless_loopback),
    (MCGILL_FULL, "mcgill", mcgill_full),
    (SLIM_DEPLOYMENT_2024, "slim2024", slim_deployment_2024),
    (SLIM_DEPLOYMENT_2025, "slim2025", slim_deployment_2025),
];

/// A room-temperature source feeding a 4 K attenuated line, a cold LNA, and
/// two warm gain stages on the return side.
///
/// | Label | Component |
/// |-------|-----------|
/// | `InputAtten` | −10 dB attenuator at 300 K |
/// | `WarmCable_In` | 2 m Fairview F141 coax |
/// | `CryoCable` | 0.5 m SS 0.86 mm coax at 4 K |
/// | `ColdAtten` | −20 dB attenuator at 4 K |
/// | `LNA` | ASU 3 GHz LNA |
/// | `ReturnCable` | 0.5 m SS 0.86 mm coax at 50 K |
/// | `WarmAmp1`, `WarmAmp2` | ZX60-3018G+ |
pub fn simple_cryogenic() -> Result<SignalChain> {
    let mut chain: SignalChain = SignalChain::new(SIMPLE_CRYOGENIC);

    chain.add_component(Attenuator::new(-10.0, 300.0)?, "InputAtten")?;
    chain.add_component(Cable::new(CableFamily::FairviewF141, 2.0)?, "WarmCable_In")?;

    chain.add_component(CryoCable::new(CryoCableFamily::Ss086, 0.5, 4.0)?, "CryoCable")?;
    chain.add_component(Attenuator::new(-20.0, 4.0)?, "ColdAtten")?;

    chain.add_component(DatasheetAmplifier::new(AmplifierModel::Asu3GhzLna)?, "LNA")?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::Ss086, 0.5, 50.0)?,
        "ReturnCable",
    )?;

    let warm = DatasheetAmplifier::new(AmplifierModel::Zx60_3018gPlus)?;
    chain.add_component(warm.clone(), "WarmAmp1")?;
    chain.add_component(warm, "WarmAmp2")?;

    Ok(chain)
}

/// A desktop SMA loopback with no loss between DAC and ADC: the chain holds
/// only the converter, so the output noise is the ADC floor.
pub fn lossless_loopback() -> Result<SignalChain> {
    let mut chain: SignalChain = SignalChain::new(LOSSLESS_LOOPBACK);
    chain.add_component(Ad9082Adc::new()?, "ADC")?;
    Ok(chain)
}

/// Modeled McGill dilution-refrigerator test stand with a CryoElectronics
/// LNA and 1.19 mm CuNi coax through the cryostat.
///
/// Input: 9 dB at 300 K, 3 m of L-com SMA, 1.5 m CuNi at 4 K, then 20 dB at
/// 4 K, 0 dB at the still (0.7 K) and 20 dB at the mixing chamber (30 mK).
/// Return: LNA, 1.5 m CuNi at 4 K, two ZX60-3018G+, 3 m of L-com SMA and a
/// 9 dB pad at 300 K in front of the ADC.
pub fn mcgill_full() -> Result<SignalChain> {
    let mut chain: SignalChain = SignalChain::new(MCGILL_FULL);

    chain.add_component(Attenuator::new(-9.0, 300.0)?, "Atten300K")?;
    chain.add_component(Cable::new(CableFamily::LcomSma, 3.0)?, "WarmCable_In")?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::CuNi119, 1.5, 4.0)?,
        "CryoCable_In",
    )?;
    chain.add_component(Attenuator::new(-20.0, 4.0)?, "Atten4K")?;
    chain.add_component(Attenuator::new(0.0, 0.7)?, "AttenStill")?;
    chain.add_component(Attenuator::new(-20.0, 0.03)?, "AttenMXC")?;

    chain.add_component(DatasheetAmplifier::new(AmplifierModel::CryoElecLna)?, "LNA")?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::CuNi119, 1.5, 4.0)?,
        "CryoCable_Return",
    )?;
    let warm = DatasheetAmplifier::new(AmplifierModel::Zx60_3018gPlus)?;
    chain.add_component(warm.clone(), "WarmAmp1")?;
    chain.add_component(warm, "WarmAmp2")?;
    chain.add_component(Cable::new(CableFamily::LcomSma, 3.0)?, "WarmCable_Return")?;
    chain.add_component(Attenuator::new(-9.0, 300.0)?, "Atten300K_Return")?;

    chain.add_component(Ad9082Adc::new()?, "ADC")?;
    Ok(chain)
}

/// 2024 SLIM deployment line: a warm VHF-1910+ high-pass, pad and booster
/// amplifier feeding a cryostat with attenuation at 4 K, the GGG stage
/// (0.7 K) and the FAA stage (0.15 K), an ASU LNA, and NbTi coax on the
/// cold half of the return.
pub fn slim_deployment_2024() -> Result<SignalChain> {
    let mut chain: SignalChain = SignalChain::new(SLIM_DEPLOYMENT_2024);

    chain.add_component(HighPassFilter::new(FilterModel::Vhf1910)?, "HighPass")?;
    chain.add_component(Attenuator::new(-10.0, 300.0)?, "Atten300K")?;
    chain.add_component(
        DatasheetAmplifier::new(AmplifierModel::Zx60_3018gPlus)?,
        "WarmAmp_In",
    )?;
    chain.add_component(Cable::new(CableFamily::FairviewF141, 3.0)?, "WarmCable_In")?;
    add_slim_input_stages(&mut chain, [-20.0, -10.0, -10.0])?;
    add_slim_return(&mut chain)?;
    Ok(chain)
}

/// 2025 SLIM deployment line: the 2024 layout without the warm pad and
/// booster, with 10 dB less at 4 K and no attenuation at the GGG stage.
pub fn slim_deployment_2025() -> Result<SignalChain> {
    let mut chain: SignalChain = SignalChain::new(SLIM_DEPLOYMENT_2025);

    chain.add_component(HighPassFilter::new(FilterModel::Vhf1910)?, "HighPass")?;
    chain.add_component(Cable::new(CableFamily::FairviewF141, 3.0)?, "WarmCable_In")?;
    add_slim_input_stages(&mut chain, [-10.0, 0.0, -10.0])?;
    add_slim_return(&mut chain)?;
    Ok(chain)
}

/// Cryostat input wiring shared by the SLIM lines, with the 4 K, GGG and FAA
/// attenuator values in that order.
fn add_slim_input_stages(chain: &mut SignalChain, attenuation_db: [f64; 3]) -> Result<()> {
    let [at_4k, at_ggg, at_faa] = attenuation_db;

    chain.add_component(
        CryoCable::new(CryoCableFamily::Ss086, 0.3, 300.0)?,
        "Cable_300to50",
    )?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::Ss219, 0.5, 4.0)?,
        "Cable_50to4",
    )?;
    chain.add_component(Attenuator::new(at_4k, 4.0)?, "Atten4K")?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::Ss219, 0.3, 4.0)?,
        "Cable_4toGGG",
    )?;
    chain.add_component(Attenuator::new(at_ggg, 0.7)?, "AttenGGG")?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::Ss086, 0.25, 0.5)?,
        "Cable_GGGtoFAA",
    )?;
    chain.add_component(Attenuator::new(at_faa, 0.15)?, "AttenFAA")?;
    Ok(())
}

/// LNA through to the ADC, identical for both SLIM lines.
fn add_slim_return(chain: &mut SignalChain) -> Result<()> {
    chain.add_component(DatasheetAmplifier::new(AmplifierModel::Asu3GhzLna)?, "LNA")?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::NbTi086, 0.25, 0.3)?,
        "Cable_FAAtoGGG",
    )?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::NbTi086, 0.5, 4.0)?,
        "Cable_GGGto4",
    )?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::CuNi086, 0.5, 50.0)?,
        "Cable_4to50",
    )?;
    chain.add_component(
        CryoCable::new(CryoCableFamily::Ss086, 0.3, 300.0)?,
        "Cable_50to300",
    )?;
    chain.add_component(
        Cable::new(CableFamily::FairviewF141, 3.0)?,
        "WarmCable_Return",
    )?;

    let warm = DatasheetAmplifier::new(AmplifierModel::Zx60_3018gPlus)?;
    chain.add_component(warm.clone(), "WarmAmp1")?;
    chain.add_component(warm, "WarmAmp2")?;
    chain.add_component(Ad9082Adc::new()?, "ADC")?;
    Ok(())
}

/// Look up a preset by name or short alias. Matching ignores ASCII case.
pub fn by_name(name: &str) -> Option<Result<SignalChain>> {
    let (preset, _, build) = PRESETS.iter().find(|(preset, alias, _)| {
        name.eq_ignore_ascii_case(preset) || name.eq_ignore_ascii_case(alias)
    })?;
    log::debug!("building preset chain {}", preset);
    Some(build())
}
