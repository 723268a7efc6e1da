//! # rfchain
//!
//! Gain and noise cascade analysis for RF receive chains.
//!
//! rfchain provides:
//! - Datasheet-backed models of amplifiers, coax, cryogenic coax,
//!   attenuators, filters and an ADC input
//! - A labelled signal chain with point-to-point gain and noise budgets at
//!   any reference point
//! - Frequency sweeps, CSV export and JSON chain files
//!
//! ## Quick Start
//!
//! ```rust
//! use rfchain::prelude::*;
//!
//! let mut chain: SignalChain = SignalChain::new("demo");
//! chain.add_component(Attenuator::new(-10.0, 300.0)?, "PAD")?;
//! chain.add_component(DatasheetAmplifier::new(AmplifierModel::Asu3GhzLna)?, "LNA")?;
//!
//! let gain = chain.total_gain(1e9)?;
//! let noise = chain.output_noise(1e9)?;
//! println!("{:.2} dB, {:.2} dBm/Hz", gain.value, psd_to_dbm_per_hz(noise.value));
//! # Ok::<(), rfchain::SolverError>(())
//! ```

pub mod presets;

pub use rfchain_core as core;
pub use rfchain_devices as devices;
pub use rfchain_solver as solver;

// ============================================================================
// Convenient re-exports from rfchain_core
// ============================================================================

pub use rfchain_core::{
    BOLTZMANN,
    Component,
    ComponentKind,
    // Errors
    Error as CoreError,
    // Interpolation
    Interpolation,
    RangePolicy,
    Response,
    Sample,
    Table,
};

pub use rfchain_core::units::{
    db_to_linear, dbm_to_watts, linear_to_db, noise_figure_from_temperature,
    noise_temperature_from_figure, psd_to_dbm_per_hz, thermal_noise_psd, watts_to_dbm,
};

// ============================================================================
// Convenient re-exports from rfchain_devices
// ============================================================================

pub use rfchain_devices::{
    Ad9082Adc,
    AmplifierModel,
    Attenuator,
    Cable,
    CableFamily,
    Category,
    ComponentInfo,
    CryoCable,
    CryoCableFamily,
    DatasheetAmplifier,
    // Closed enum over every model
    Device,
    // Errors
    Error as DeviceError,
    FilterModel,
    FixedAmplifier,
    HighPassFilter,
    ParamKind,
    ParamSpec,
    ParamValue,
    Params,
    params,
};

pub use rfchain_devices::metadata::{by_category, lookup, registry};

// ============================================================================
// Convenient re-exports from rfchain_solver
// ============================================================================

pub use rfchain_solver::{
    AnalysisConfig,
    Annotation,
    ChainRecord,
    ChainRef,
    ComponentRecord,
    // Errors
    Error as SolverError,
    GainSweep,
    NoiseBreakdown,
    NoiseContribution,
    NoiseSweep,
    ParallelSweepConfig,
    SignalChain,
    SweepConfig,
    SweepType,
};

/// Prelude module containing commonly used types and traits.
///
/// ```rust
/// use rfchain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Component, RangePolicy, Sample};

    pub use crate::{
        AmplifierModel, Attenuator, Cable, CableFamily, CryoCable, CryoCableFamily,
        DatasheetAmplifier, Device, FixedAmplifier, HighPassFilter,
    };

    pub use crate::{AnalysisConfig, SignalChain, SweepConfig};

    pub use crate::{db_to_linear, psd_to_dbm_per_hz};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let mut chain: SignalChain = SignalChain::new("prelude");
        chain
            .add_component(Attenuator::new(-3.0, 300.0).unwrap(), "PAD")
            .unwrap();
        assert_eq!(chain.total_gain(1e9).unwrap().value, -3.0);
    }

    #[test]
    fn test_registry_reexport() {
        assert!(lookup("Attenuator").is_some());
        assert_eq!(registry().len(), 22);
        assert!(by_category(Category::Amplifiers).count() >= 4);
    }
}
